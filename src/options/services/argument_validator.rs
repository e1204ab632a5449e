use std::env;
use std::path::{Path, PathBuf};

use crate::options::domain::{CveId, Flag, RawArguments};
use crate::options::policies::check_argument_rules;
use crate::shared::error::OptionsError;
use crate::shared::security::validate_readable_file;
use crate::shared::OptionsResult;

/// Values extracted while validating, already in their checked form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedArguments {
    pub cve: Option<CveId>,
    /// Absolute path of an existing, readable manifest file
    pub manifest_file: Option<PathBuf>,
}

/// ArgumentValidator rejects illegal argument combinations before any
/// derivation happens.
///
/// Checks run in a fixed order: CVE format, then the argument rule
/// table, then the manifest file on disk.
pub struct ArgumentValidator;

impl ArgumentValidator {
    pub fn validate(args: &RawArguments) -> OptionsResult<ValidatedArguments> {
        let cve = Self::validate_cve(args.cve.as_deref())?;
        check_argument_rules(args)?;

        let manifest_file = match args.file.as_deref() {
            Some(file) if args.is_set(Flag::File) => Some(Self::validate_manifest_file(file)?),
            _ => None,
        };

        Ok(ValidatedArguments { cve, manifest_file })
    }

    /// Any supplied value is checked, including an empty one
    pub fn validate_cve(cve: Option<&str>) -> OptionsResult<Option<CveId>> {
        cve.map(|id| CveId::new(id.to_string())).transpose()
    }

    /// Resolves the manifest path against the working directory and checks
    /// that it names a readable regular file
    pub fn validate_manifest_file(file: &Path) -> OptionsResult<PathBuf> {
        let cwd = env::current_dir().unwrap_or_default();
        let absolute = std::path::absolute(file).unwrap_or_else(|_| cwd.join(file));

        validate_readable_file(&absolute).map_err(|details| {
            tracing::debug!("manifest file rejected: {}", details);
            OptionsError::FileNotFound {
                path: absolute.clone(),
                cwd,
            }
        })?;

        Ok(absolute)
    }
}
