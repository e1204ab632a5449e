pub mod cve_id;
pub mod flag;
pub mod log_config;
pub mod priority;
pub mod raw_arguments;
pub mod release_info;
pub mod resolved_options;

pub use cve_id::CveId;
pub use flag::Flag;
pub use log_config::{LogConfig, LogLevel, LogSink};
pub use priority::Priority;
pub use raw_arguments::RawArguments;
pub use release_info::ReleaseInfo;
pub use resolved_options::{OvalSource, ResolvedOptions};
