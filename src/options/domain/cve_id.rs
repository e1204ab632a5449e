use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::shared::error::OptionsError;
use crate::shared::OptionsResult;

/// Four-digit year followed by a sequence number of at least four digits
const CVE_ID_PATTERN: &str = r"^CVE-[0-9]{4}-[0-9]{4,}$";

fn cve_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(CVE_ID_PATTERN).expect("CVE ID pattern is a valid regex"))
}

/// NewType wrapper for a CVE identifier with format validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CveId(String);

impl CveId {
    pub fn new(id: String) -> OptionsResult<Self> {
        if !cve_id_regex().is_match(&id) {
            return Err(OptionsError::InvalidCveFormat { cve: id });
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
