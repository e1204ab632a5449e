use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DISTRIB_ID_KEY: &str = "DISTRIB_ID";
pub const DISTRIB_CODENAME_KEY: &str = "DISTRIB_CODENAME";

/// Key/value pairs read from a host release metadata file such as
/// `/etc/lsb-release`, together with the file they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    source: PathBuf,
    fields: HashMap<String, String>,
}

impl ReleaseInfo {
    pub fn new(source: PathBuf, fields: HashMap<String, String>) -> Self {
        Self { source, fields }
    }

    /// Parses line-oriented `KEY=value` content.
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped. Keys and
    /// values are trimmed and one pair of matching quotes around a value is
    /// removed. A repeated key keeps its last value.
    pub fn parse(source: &Path, content: &str) -> Self {
        let fields = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
            .filter(|(key, _)| !key.is_empty())
            .collect();

        Self::new(source.to_path_buf(), fields)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn distrib_id(&self) -> Option<&str> {
        self.get(DISTRIB_ID_KEY)
    }

    pub fn distrib_codename(&self) -> Option<&str> {
        self.get(DISTRIB_CODENAME_KEY)
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
