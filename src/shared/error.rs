use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::options::domain::Flag;

/// Exit codes for the CLI application.
///
/// These codes allow wrapper scripts to tell a bad invocation apart from
/// a host that cannot be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Options resolved successfully
    Success = 0,
    /// Invalid command-line arguments (clap errors or illegal combinations)
    InvalidArguments = 2,
    /// Application error (host metadata, unsupported distribution, config file)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while validating arguments and resolving options.
///
/// Every variant is fatal: the resolver either succeeds completely or the
/// process aborts before any scan is attempted.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid CVE ID ({cve})\n\n💡 Hint: CVE IDs look like CVE-2020-1234")]
    InvalidCveFormat { cve: String },

    #[error("The {first} and {second} options are incompatible and may not be specified together.")]
    IncompatibleArguments { first: Flag, second: Flag },

    #[error("Cannot specify {flag} argument without {required}.")]
    MissingDependency { flag: Flag, required: Flag },

    #[error("Cannot find manifest file \"{}\". Current working directory is \"{}\".", path.display(), cwd.display())]
    FileNotFound { path: PathBuf, cwd: PathBuf },

    #[error("DISTRIB_ID in {} must be Ubuntu (DISTRIB_ID={distrib_id})", path.display())]
    UnsupportedDistribution { path: PathBuf, distrib_id: String },

    #[error("Failed to read host release metadata: {}\nDetails: {details}\n\n💡 Hint: Run on an Ubuntu host or pass -m|--manifest <CODENAME>", path.display())]
    HostMetadataUnavailable { path: PathBuf, details: String },
}

impl OptionsError {
    /// Maps the error to the process exit code reported by the CLI
    pub fn exit_code(&self) -> ExitCode {
        match self {
            OptionsError::InvalidCveFormat { .. }
            | OptionsError::IncompatibleArguments { .. }
            | OptionsError::MissingDependency { .. }
            | OptionsError::FileNotFound { .. } => ExitCode::InvalidArguments,
            OptionsError::UnsupportedDistribution { .. }
            | OptionsError::HostMetadataUnavailable { .. } => ExitCode::ApplicationError,
        }
    }
}
