//! cvescan - options resolution for the Ubuntu CVE scanner
//!
//! This library validates a cvescan invocation and derives everything the
//! scan stage needs: OVAL data location, manifest source, cache policy and
//! logging mode. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`options`): flag taxonomy, argument rules and pure derivations
//! - **Application Layer** (`application`): the options resolution use case
//! - **Ports** (`ports`): interface to host release metadata
//! - **Adapters** (`adapters`): `/etc/lsb-release` reader and logging setup
//! - **Shared** (`shared`): error types and file checks
//!
//! # Example
//!
//! ```no_run
//! use cvescan::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ResolveOptionsUseCase::new(LsbReleaseReader::new(), PathBuf::from("/usr/share/cvescan"));
//!
//! let args = RawArguments {
//!     manifest: Some("jammy".to_string()),
//!     ..Default::default()
//! };
//! let options = use_case.execute(&args)?;
//! assert_eq!(options.oval_file(), "oci.com.ubuntu.jammy.cve.oval.xml");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod options;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::init_logging;
    pub use crate::adapters::outbound::filesystem::{LsbReleaseReader, DEFAULT_LSB_RELEASE_PATH};
    pub use crate::application::use_cases::ResolveOptionsUseCase;
    pub use crate::options::domain::{
        CveId, Flag, LogConfig, LogLevel, LogSink, OvalSource, Priority, RawArguments,
        ReleaseInfo, ResolvedOptions,
    };
    pub use crate::options::policies::{ArgumentRule, ARGUMENT_RULES};
    pub use crate::ports::outbound::ReleaseInfoReader;
    pub use crate::shared::error::{ExitCode, OptionsError};
    pub use crate::shared::{OptionsResult, Result};
}
