use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{CveId, LogConfig, Priority};

/// Location of the OVAL data the scan engine evaluates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OvalSource {
    pub base_url: String,
    pub file: String,
    pub zip: String,
}

/// Fully validated and derived options for one cvescan invocation.
///
/// Only the options resolver can build this value, so holding one proves
/// the arguments passed validation. It is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    pub(crate) distrib_codename: String,
    pub(crate) manifest_mode: bool,
    pub(crate) experimental_mode: bool,
    pub(crate) test_mode: bool,
    pub(crate) nagios_mode: bool,
    pub(crate) oval: OvalSource,
    pub(crate) manifest_file: Option<PathBuf>,
    pub(crate) manifest_url: String,
    pub(crate) remove_cached_files: bool,
    pub(crate) verbose_oscap_options: String,
    pub(crate) cve: Option<CveId>,
    pub(crate) priority: Priority,
    pub(crate) all_cve: bool,
    pub(crate) xslt_file_path: PathBuf,
    pub(crate) extra_sed_expression: String,
    pub(crate) log_config: LogConfig,
}

impl ResolvedOptions {
    pub fn distrib_codename(&self) -> &str {
        &self.distrib_codename
    }

    pub fn manifest_mode(&self) -> bool {
        self.manifest_mode
    }

    pub fn experimental_mode(&self) -> bool {
        self.experimental_mode
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn nagios_mode(&self) -> bool {
        self.nagios_mode
    }

    pub fn oval(&self) -> &OvalSource {
        &self.oval
    }

    pub fn oval_base_url(&self) -> &str {
        &self.oval.base_url
    }

    pub fn oval_file(&self) -> &str {
        &self.oval.file
    }

    pub fn oval_zip(&self) -> &str {
        &self.oval.zip
    }

    /// Absolute path of the manifest file, if one was supplied
    pub fn manifest_file(&self) -> Option<&Path> {
        self.manifest_file.as_deref()
    }

    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    pub fn remove_cached_files(&self) -> bool {
        self.remove_cached_files
    }

    /// Extra flags for `oscap` when verbose logging is requested; empty otherwise
    pub fn verbose_oscap_options(&self) -> &str {
        &self.verbose_oscap_options
    }

    pub fn cve(&self) -> Option<&CveId> {
        self.cve.as_ref()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn all_cve(&self) -> bool {
        self.all_cve
    }

    pub fn xslt_file_path(&self) -> &Path {
        &self.xslt_file_path
    }

    pub fn extra_sed_expression(&self) -> &str {
        &self.extra_sed_expression
    }

    pub fn log_config(&self) -> LogConfig {
        self.log_config
    }
}
