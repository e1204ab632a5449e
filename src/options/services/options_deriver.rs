use std::path::{Path, PathBuf};

use crate::options::domain::{LogConfig, OvalSource};

pub const OVAL_BASE_URL: &str = "https://people.canonical.com/~ubuntu-security/oval";
pub const CVE_TRACKER_URL: &str = "http://people.canonical.com/~ubuntu-security/cve/";
/// File the scan engine writes verbose output to
pub const DEBUG_LOG: &str = "debug.log";
pub const XSLT_FILE_NAME: &str = "text.xsl";

/// Logger settings and the matching extra `oscap` flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verbosity {
    pub log_config: LogConfig,
    pub oscap_options: String,
}

/// OptionsDeriver holds the pure functions that compute derived
/// settings from validated flags and the resolved codename.
pub struct OptionsDeriver;

impl OptionsDeriver {
    /// OVAL data location for a release.
    ///
    /// Manifest mode selects the `oci.` data set. Experimental mode moves to
    /// the `/alpha` tree and adds an `alpha.` prefix on top of any `oci.`.
    pub fn oval_source(codename: &str, manifest_mode: bool, experimental_mode: bool) -> OvalSource {
        let mut base_url = OVAL_BASE_URL.to_string();
        let mut file = format!("com.ubuntu.{}.cve.oval.xml", codename);

        if manifest_mode {
            file = format!("oci.{}", file);
        }

        if experimental_mode {
            base_url = format!("{}/alpha", base_url);
            file = format!("alpha.{}", file);
        }

        let zip = format!("{}.bz2", file);
        OvalSource {
            base_url,
            file,
            zip,
        }
    }

    /// Cloud image package manifest for a release
    pub fn manifest_url(codename: &str) -> String {
        format!(
            "https://cloud-images.ubuntu.com/{codename}/current/{codename}-server-cloudimg-amd64.manifest"
        )
    }

    /// Manifest mode always starts from fresh downloads
    pub fn remove_cached_files(reuse: bool, manifest_mode: bool) -> bool {
        !reuse || manifest_mode
    }

    pub fn verbosity(verbose: bool, silent: bool) -> Verbosity {
        if verbose {
            Verbosity {
                log_config: LogConfig::verbose(),
                oscap_options: format!("--verbose WARNING --verbose-log-file {}", DEBUG_LOG),
            }
        } else if silent {
            Verbosity {
                log_config: LogConfig::silent(),
                oscap_options: String::new(),
            }
        } else {
            Verbosity {
                log_config: LogConfig::default(),
                oscap_options: String::new(),
            }
        }
    }

    /// sed expression turning bare CVE IDs into tracker links, unless only
    /// a plain list was requested
    pub fn extra_sed_expression(list: bool) -> String {
        if list {
            String::new()
        } else {
            format!("-e s@^@{}@", CVE_TRACKER_URL)
        }
    }

    pub fn xslt_file_path(script_dir: &Path) -> PathBuf {
        script_dir.join(XSLT_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::domain::{LogLevel, LogSink};

    #[test]
    fn test_oval_source_default_mode() {
        let oval = OptionsDeriver::oval_source("focal", false, false);
        assert_eq!(oval.file, "com.ubuntu.focal.cve.oval.xml");
        assert_eq!(oval.zip, "com.ubuntu.focal.cve.oval.xml.bz2");
        assert_eq!(oval.base_url, OVAL_BASE_URL);
        assert!(!oval.base_url.ends_with("/alpha"));
    }

    #[test]
    fn test_oval_source_manifest_mode() {
        let oval = OptionsDeriver::oval_source("jammy", true, false);
        assert_eq!(oval.file, "oci.com.ubuntu.jammy.cve.oval.xml");
        assert_eq!(oval.zip, "oci.com.ubuntu.jammy.cve.oval.xml.bz2");
        assert_eq!(oval.base_url, OVAL_BASE_URL);
    }

    #[test]
    fn test_oval_source_experimental_mode() {
        let oval = OptionsDeriver::oval_source("focal", false, true);
        assert_eq!(oval.file, "alpha.com.ubuntu.focal.cve.oval.xml");
        assert_eq!(oval.zip, "alpha.com.ubuntu.focal.cve.oval.xml.bz2");
        assert!(oval.base_url.ends_with("/alpha"));
        assert_eq!(
            oval.base_url,
            "https://people.canonical.com/~ubuntu-security/oval/alpha"
        );
    }

    #[test]
    fn test_oval_source_manifest_and_experimental_combine() {
        let oval = OptionsDeriver::oval_source("jammy", true, true);
        assert_eq!(oval.file, "alpha.oci.com.ubuntu.jammy.cve.oval.xml");
        assert_eq!(oval.zip, "alpha.oci.com.ubuntu.jammy.cve.oval.xml.bz2");
        assert!(oval.base_url.ends_with("/alpha"));
    }

    #[test]
    fn test_manifest_url() {
        assert_eq!(
            OptionsDeriver::manifest_url("focal"),
            "https://cloud-images.ubuntu.com/focal/current/focal-server-cloudimg-amd64.manifest"
        );
    }

    #[test]
    fn test_remove_cached_files() {
        assert!(OptionsDeriver::remove_cached_files(false, false));
        assert!(!OptionsDeriver::remove_cached_files(true, false));
        assert!(OptionsDeriver::remove_cached_files(false, true));
        assert!(OptionsDeriver::remove_cached_files(true, true));
    }

    #[test]
    fn test_verbosity_verbose() {
        let verbosity = OptionsDeriver::verbosity(true, false);
        assert_eq!(verbosity.log_config.level, LogLevel::Debug);
        assert_eq!(verbosity.log_config.sink, LogSink::Stderr);
        assert_eq!(
            verbosity.oscap_options,
            "--verbose WARNING --verbose-log-file debug.log"
        );
    }

    #[test]
    fn test_verbosity_silent() {
        let verbosity = OptionsDeriver::verbosity(false, true);
        assert!(verbosity.log_config.is_silent());
        assert!(verbosity.oscap_options.is_empty());
    }

    #[test]
    fn test_verbosity_default() {
        let verbosity = OptionsDeriver::verbosity(false, false);
        assert_eq!(verbosity.log_config, LogConfig::default());
        assert_eq!(verbosity.log_config.level, LogLevel::Info);
        assert!(verbosity.oscap_options.is_empty());
    }

    #[test]
    fn test_extra_sed_expression() {
        assert_eq!(OptionsDeriver::extra_sed_expression(true), "");
        assert_eq!(
            OptionsDeriver::extra_sed_expression(false),
            "-e s@^@http://people.canonical.com/~ubuntu-security/cve/@"
        );
    }

    #[test]
    fn test_xslt_file_path() {
        assert_eq!(
            OptionsDeriver::xslt_file_path(Path::new("/usr/lib/cvescan")),
            PathBuf::from("/usr/lib/cvescan/text.xsl")
        );
    }
}
