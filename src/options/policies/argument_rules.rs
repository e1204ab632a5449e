use crate::options::domain::{Flag, RawArguments};
use crate::shared::error::OptionsError;
use crate::shared::OptionsResult;

/// A single constraint between two command-line flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentRule {
    /// Setting the first flag forbids setting the second
    Excludes(Flag, Flag),
    /// Setting the first flag requires the second to be set as well
    Requires(Flag, Flag),
}

impl ArgumentRule {
    /// Evaluates this rule alone against the given arguments
    pub fn check(&self, args: &RawArguments) -> OptionsResult<()> {
        match *self {
            ArgumentRule::Excludes(first, second) => {
                if args.is_set(first) && args.is_set(second) {
                    return Err(OptionsError::IncompatibleArguments { first, second });
                }
            }
            ArgumentRule::Requires(flag, required) => {
                if args.is_set(flag) && !args.is_set(required) {
                    return Err(OptionsError::MissingDependency { flag, required });
                }
            }
        }
        Ok(())
    }
}

/// Compatibility rules between operating modes, checked in this order.
///
/// Manifest, nagios, test and silent modes each restrict which other flags
/// may accompany them. The first violated rule determines the error.
pub const ARGUMENT_RULES: &[ArgumentRule] = &[
    // manifest mode
    ArgumentRule::Excludes(Flag::Manifest, Flag::Reuse),
    ArgumentRule::Excludes(Flag::Manifest, Flag::Test),
    ArgumentRule::Requires(Flag::File, Flag::Manifest),
    // nagios mode
    ArgumentRule::Excludes(Flag::Nagios, Flag::Cve),
    ArgumentRule::Excludes(Flag::Nagios, Flag::Silent),
    ArgumentRule::Excludes(Flag::Nagios, Flag::Updates),
    // test mode
    ArgumentRule::Excludes(Flag::Test, Flag::Cve),
    ArgumentRule::Excludes(Flag::Test, Flag::Experimental),
    ArgumentRule::Excludes(Flag::Test, Flag::File),
    ArgumentRule::Excludes(Flag::Test, Flag::Manifest),
    ArgumentRule::Excludes(Flag::Test, Flag::Nagios),
    ArgumentRule::Excludes(Flag::Test, Flag::Reuse),
    ArgumentRule::Excludes(Flag::Test, Flag::Silent),
    ArgumentRule::Excludes(Flag::Test, Flag::Updates),
    // silent mode
    ArgumentRule::Requires(Flag::Silent, Flag::Cve),
    ArgumentRule::Excludes(Flag::Silent, Flag::Verbose),
];

/// Checks every rule in table order, stopping at the first violation
pub fn check_argument_rules(args: &RawArguments) -> OptionsResult<()> {
    ARGUMENT_RULES.iter().try_for_each(|rule| rule.check(args))
}
