/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the options resolver uses
/// to reach the host system.
pub mod release_info_reader;

pub use release_info_reader::ReleaseInfoReader;
