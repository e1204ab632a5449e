mod cli;

use anyhow::Context;
use cli::Args;
use cvescan::config::{discover_config, load_config_from_path, ConfigFile};
use cvescan::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let lsb_release_path = config
        .as_ref()
        .and_then(|c| c.lsb_release_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LSB_RELEASE_PATH));

    let raw_arguments = args.into_raw_arguments(config.as_ref())?;

    // Create adapters (Dependency Injection)
    let release_info_reader = LsbReleaseReader::with_path(lsb_release_path);
    let use_case = ResolveOptionsUseCase::new(release_info_reader, script_dir());

    let options = use_case.execute(&raw_arguments)?;

    init_logging(&options.log_config())?;
    log_summary(&options);

    let json = serde_json::to_string_pretty(&options)
        .context("Failed to serialize resolved options")?;
    println!("{}", json);

    Ok(())
}

/// Loads the explicit config file, or the one in the working directory if any
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine working directory")?;
            discover_config(&cwd)
        }
    }
}

/// Directory of the running executable; the report stylesheet ships beside it
fn script_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn log_summary(options: &ResolvedOptions) {
    tracing::info!(
        "Scanning Ubuntu {} using {}/{}",
        options.distrib_codename(),
        options.oval_base_url(),
        options.oval_zip()
    );
    if let Some(manifest) = options.manifest_file() {
        tracing::info!("Manifest file: {}", manifest.display());
    } else if options.manifest_mode() {
        tracing::info!("Manifest will be downloaded from {}", options.manifest_url());
    }
    tracing::debug!("Priority threshold: {}", options.priority());
    tracing::debug!("Remove cached files: {}", options.remove_cached_files());
    tracing::debug!("Report stylesheet: {}", options.xslt_file_path().display());
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<OptionsError>()
        .map(OptionsError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}
