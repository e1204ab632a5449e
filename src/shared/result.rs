use crate::shared::error::OptionsError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by the shell code (config loading, entry point).
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of the options resolution pipeline, carrying a typed failure.
pub type OptionsResult<T> = std::result::Result<T, OptionsError>;
