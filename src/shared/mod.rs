/// Shared kernel - error types, result aliases and file-system checks
/// used across every layer.
pub mod error;
pub mod result;
pub mod security;

pub use result::{OptionsResult, Result};
