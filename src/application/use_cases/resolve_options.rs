use std::path::PathBuf;

use crate::options::domain::{Flag, RawArguments, ResolvedOptions};
use crate::options::services::{ArgumentValidator, CodenameResolver, OptionsDeriver};
use crate::ports::outbound::ReleaseInfoReader;
use crate::shared::OptionsResult;

/// ResolveOptionsUseCase - turns raw arguments into `ResolvedOptions`
///
/// Validation runs to completion before anything is derived, and the host
/// release metadata is read at most once (never in manifest mode).
///
/// # Type Parameters
/// * `R` - ReleaseInfoReader implementation
pub struct ResolveOptionsUseCase<R> {
    release_info_reader: R,
    script_dir: PathBuf,
}

impl<R: ReleaseInfoReader> ResolveOptionsUseCase<R> {
    /// Creates a new use case
    ///
    /// # Arguments
    /// * `release_info_reader` - Source of host release metadata
    /// * `script_dir` - Directory holding the report stylesheet
    pub fn new(release_info_reader: R, script_dir: PathBuf) -> Self {
        Self {
            release_info_reader,
            script_dir,
        }
    }

    pub fn execute(&self, args: &RawArguments) -> OptionsResult<ResolvedOptions> {
        let validated = ArgumentValidator::validate(args)?;

        let distrib_codename = CodenameResolver::resolve(args.manifest_codename(), || {
            self.release_info_reader.read_release_info()
        })?;
        tracing::debug!("target release codename: {}", distrib_codename);

        let manifest_mode = args.manifest_mode();
        let experimental_mode = args.is_set(Flag::Experimental);
        let verbosity = OptionsDeriver::verbosity(args.verbose, args.silent);

        Ok(ResolvedOptions {
            oval: OptionsDeriver::oval_source(&distrib_codename, manifest_mode, experimental_mode),
            manifest_url: OptionsDeriver::manifest_url(&distrib_codename),
            distrib_codename,
            manifest_mode,
            experimental_mode,
            test_mode: args.test,
            nagios_mode: args.nagios,
            manifest_file: validated.manifest_file,
            remove_cached_files: OptionsDeriver::remove_cached_files(args.reuse, manifest_mode),
            verbose_oscap_options: verbosity.oscap_options,
            cve: validated.cve,
            priority: args.priority,
            all_cve: !args.updates,
            xslt_file_path: OptionsDeriver::xslt_file_path(&self.script_dir),
            extra_sed_expression: OptionsDeriver::extra_sed_expression(args.list),
            log_config: verbosity.log_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::domain::{LogSink, Priority, ReleaseInfo};
    use crate::shared::error::OptionsError;
    use std::cell::Cell;
    use std::path::Path;

    struct StubReleaseInfoReader {
        content: &'static str,
        reads: Cell<usize>,
    }

    impl StubReleaseInfoReader {
        fn new(content: &'static str) -> Self {
            Self {
                content,
                reads: Cell::new(0),
            }
        }
    }

    impl ReleaseInfoReader for StubReleaseInfoReader {
        fn read_release_info(&self) -> OptionsResult<ReleaseInfo> {
            self.reads.set(self.reads.get() + 1);
            Ok(ReleaseInfo::parse(Path::new("/etc/lsb-release"), self.content))
        }
    }

    fn use_case(content: &'static str) -> ResolveOptionsUseCase<StubReleaseInfoReader> {
        ResolveOptionsUseCase::new(
            StubReleaseInfoReader::new(content),
            PathBuf::from("/opt/cvescan"),
        )
    }

    const FOCAL: &str = "DISTRIB_ID=Ubuntu\nDISTRIB_CODENAME=focal\n";

    #[test]
    fn test_default_invocation() {
        let use_case = use_case(FOCAL);
        let options = use_case.execute(&RawArguments::default()).unwrap();

        assert_eq!(options.distrib_codename(), "focal");
        assert!(!options.manifest_mode());
        assert!(!options.experimental_mode());
        assert!(!options.test_mode());
        assert!(!options.nagios_mode());
        assert_eq!(options.oval_file(), "com.ubuntu.focal.cve.oval.xml");
        assert_eq!(options.oval_zip(), "com.ubuntu.focal.cve.oval.xml.bz2");
        assert_eq!(
            options.oval_base_url(),
            "https://people.canonical.com/~ubuntu-security/oval"
        );
        assert_eq!(options.manifest_file(), None);
        assert!(options.remove_cached_files());
        assert_eq!(options.verbose_oscap_options(), "");
        assert_eq!(options.cve(), None);
        assert_eq!(options.priority(), Priority::High);
        assert!(options.all_cve());
        assert_eq!(options.xslt_file_path(), Path::new("/opt/cvescan/text.xsl"));
        assert!(!options.extra_sed_expression().is_empty());
        assert_eq!(use_case.release_info_reader.reads.get(), 1);
    }

    #[test]
    fn test_manifest_mode_does_not_read_host_metadata() {
        let use_case = use_case("DISTRIB_ID=Debian\n");
        let args = RawArguments {
            manifest: Some("jammy".to_string()),
            ..Default::default()
        };
        let options = use_case.execute(&args).unwrap();

        assert_eq!(options.distrib_codename(), "jammy");
        assert!(options.manifest_mode());
        assert_eq!(options.oval_file(), "oci.com.ubuntu.jammy.cve.oval.xml");
        assert_eq!(use_case.release_info_reader.reads.get(), 0);
    }

    #[test]
    fn test_invalid_arguments_abort_before_host_read() {
        let use_case = use_case(FOCAL);
        let args = RawArguments {
            silent: true,
            ..Default::default()
        };
        let result = use_case.execute(&args);

        assert!(matches!(result, Err(OptionsError::MissingDependency { .. })));
        assert_eq!(use_case.release_info_reader.reads.get(), 0);
    }

    #[test]
    fn test_silent_mode_selects_null_sink() {
        let use_case = use_case(FOCAL);
        let args = RawArguments {
            silent: true,
            cve: Some("CVE-2020-1234".to_string()),
            ..Default::default()
        };
        let options = use_case.execute(&args).unwrap();

        assert_eq!(options.log_config().sink, LogSink::Null);
        assert_eq!(options.cve().map(|c| c.as_str()), Some("CVE-2020-1234"));
    }

    #[test]
    fn test_updates_clears_all_cve() {
        let use_case = use_case(FOCAL);
        let args = RawArguments {
            updates: true,
            ..Default::default()
        };
        assert!(!use_case.execute(&args).unwrap().all_cve());
    }
}
