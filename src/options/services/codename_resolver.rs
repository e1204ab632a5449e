use crate::options::domain::release_info::{DISTRIB_CODENAME_KEY, DISTRIB_ID_KEY};
use crate::options::domain::ReleaseInfo;
use crate::shared::error::OptionsError;
use crate::shared::OptionsResult;

/// The only distribution family cvescan can scan
pub const SUPPORTED_DISTRIB_ID: &str = "Ubuntu";

/// CodenameResolver determines which Ubuntu release is being scanned
pub struct CodenameResolver;

impl CodenameResolver {
    /// Returns the manifest override verbatim when present; otherwise
    /// loads the host release metadata and takes its codename.
    ///
    /// `load_release_info` is only called when there is no override.
    pub fn resolve<F>(manifest_override: Option<&str>, load_release_info: F) -> OptionsResult<String>
    where
        F: FnOnce() -> OptionsResult<ReleaseInfo>,
    {
        if let Some(codename) = manifest_override.filter(|c| !c.is_empty()) {
            return Ok(codename.to_string());
        }

        let release_info = load_release_info()?;
        Self::codename_from_release_info(&release_info)
    }

    /// Extracts the codename from host metadata, rejecting non-Ubuntu hosts
    pub fn codename_from_release_info(release_info: &ReleaseInfo) -> OptionsResult<String> {
        let distrib_id = release_info
            .distrib_id()
            .ok_or_else(|| missing_key(release_info, DISTRIB_ID_KEY))?;

        if distrib_id != SUPPORTED_DISTRIB_ID {
            return Err(OptionsError::UnsupportedDistribution {
                path: release_info.source().to_path_buf(),
                distrib_id: distrib_id.to_string(),
            });
        }

        release_info
            .distrib_codename()
            .filter(|codename| !codename.is_empty())
            .map(str::to_string)
            .ok_or_else(|| missing_key(release_info, DISTRIB_CODENAME_KEY))
    }
}

fn missing_key(release_info: &ReleaseInfo, key: &str) -> OptionsError {
    OptionsError::HostMetadataUnavailable {
        path: release_info.source().to_path_buf(),
        details: format!("{} is missing", key),
    }
}
