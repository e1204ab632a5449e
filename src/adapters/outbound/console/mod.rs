/// Console adapters for user-facing diagnostics
mod logging;

pub use logging::{default_directive, init_logging};
