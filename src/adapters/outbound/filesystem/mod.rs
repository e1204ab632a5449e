/// Filesystem adapters for reading host metadata
mod lsb_release_reader;

pub use lsb_release_reader::{LsbReleaseReader, DEFAULT_LSB_RELEASE_PATH};
