use crate::options::domain::ReleaseInfo;
use crate::shared::OptionsResult;

/// ReleaseInfoReader port for reading host OS release metadata
///
/// This port abstracts access to the distribution metadata file
/// (`/etc/lsb-release` on Ubuntu) so that codename resolution can be
/// exercised without touching the real host.
pub trait ReleaseInfoReader {
    /// Reads and parses the host release metadata
    ///
    /// # Errors
    /// Returns `OptionsError::HostMetadataUnavailable` if the metadata file
    /// is missing, unreadable or oversized
    fn read_release_info(&self) -> OptionsResult<ReleaseInfo>;
}
