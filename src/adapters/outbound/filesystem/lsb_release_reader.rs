use crate::options::domain::ReleaseInfo;
use crate::ports::outbound::ReleaseInfoReader;
use crate::shared::error::OptionsError;
use crate::shared::security::{validate_file_size, MAX_METADATA_FILE_SIZE};
use crate::shared::OptionsResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known location of the Ubuntu release metadata
pub const DEFAULT_LSB_RELEASE_PATH: &str = "/etc/lsb-release";

/// LsbReleaseReader adapter reading `KEY=value` release metadata from disk
///
/// Implements the ReleaseInfoReader port against `/etc/lsb-release` or
/// any file with the same layout.
pub struct LsbReleaseReader {
    path: PathBuf,
}

impl LsbReleaseReader {
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(DEFAULT_LSB_RELEASE_PATH))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, details: String) -> OptionsError {
        OptionsError::HostMetadataUnavailable {
            path: self.path.clone(),
            details,
        }
    }
}

impl Default for LsbReleaseReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseInfoReader for LsbReleaseReader {
    fn read_release_info(&self) -> OptionsResult<ReleaseInfo> {
        let metadata = fs::metadata(&self.path).map_err(|e| self.unavailable(e.to_string()))?;

        if !metadata.is_file() {
            return Err(self.unavailable("not a regular file".to_string()));
        }

        validate_file_size(metadata.len(), &self.path, MAX_METADATA_FILE_SIZE)
            .map_err(|details| self.unavailable(details))?;

        let content =
            fs::read_to_string(&self.path).map_err(|e| self.unavailable(e.to_string()))?;

        tracing::debug!("read release metadata from {}", self.path.display());
        Ok(ReleaseInfo::parse(&self.path, &content))
    }
}
