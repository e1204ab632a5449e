mod argument_validator;
mod codename_resolver;
mod options_deriver;

pub use argument_validator::{ArgumentValidator, ValidatedArguments};
pub use codename_resolver::{CodenameResolver, SUPPORTED_DISTRIB_ID};
pub use options_deriver::{OptionsDeriver, Verbosity, DEBUG_LOG, OVAL_BASE_URL};
