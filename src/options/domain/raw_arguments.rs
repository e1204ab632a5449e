use std::path::PathBuf;

use super::{Flag, Priority};

/// Flat record of the parsed command-line arguments, before validation.
///
/// String-valued flags count as set only when present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArguments {
    pub cve: Option<String>,
    pub experimental: bool,
    pub file: Option<PathBuf>,
    /// Target release codename; its presence enables manifest mode
    pub manifest: Option<String>,
    pub nagios: bool,
    pub priority: Priority,
    pub reuse: bool,
    pub silent: bool,
    pub test: bool,
    pub updates: bool,
    pub verbose: bool,
    pub list: bool,
}

impl RawArguments {
    pub fn is_set(&self, flag: Flag) -> bool {
        match flag {
            Flag::Cve => is_present(self.cve.as_deref()),
            Flag::Experimental => self.experimental,
            Flag::File => self
                .file
                .as_ref()
                .is_some_and(|path| !path.as_os_str().is_empty()),
            Flag::List => self.list,
            Flag::Manifest => is_present(self.manifest.as_deref()),
            Flag::Nagios => self.nagios,
            // always carries a value, defaulting to high
            Flag::Priority => true,
            Flag::Reuse => self.reuse,
            Flag::Silent => self.silent,
            Flag::Test => self.test,
            Flag::Updates => self.updates,
            Flag::Verbose => self.verbose,
        }
    }

    /// Manifest codename override, if manifest mode is active
    pub fn manifest_codename(&self) -> Option<&str> {
        self.manifest.as_deref().filter(|codename| !codename.is_empty())
    }

    pub fn manifest_mode(&self) -> bool {
        self.is_set(Flag::Manifest)
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
