use clap::Parser;
use std::path::PathBuf;

use cvescan::config::ConfigFile;
use cvescan::prelude::{Priority, RawArguments, Result};

/// Scan an Ubuntu system or cloud image manifest for known CVEs
#[derive(Parser, Debug)]
#[command(name = "cvescan")]
#[command(version)]
#[command(about = "Scan an Ubuntu system or cloud image manifest for known CVEs", long_about = None)]
pub struct Args {
    /// Report whether this system is vulnerable to a single CVE
    #[arg(short, long, value_name = "CVE-ID")]
    pub cve: Option<String>,

    /// Minimum CVE priority: untriaged, low, medium, high, critical or all [default: high]
    #[arg(short, long)]
    pub priority: Option<Priority>,

    /// Only print the result of a --cve check
    #[arg(short, long)]
    pub silent: bool,

    /// Use the experimental (alpha) OVAL data
    #[arg(short = 'x', long)]
    pub experimental: bool,

    /// Print bare CVE IDs instead of tracker URLs
    #[arg(short, long)]
    pub list: bool,

    /// Run against the bundled test data
    #[arg(short, long)]
    pub test: bool,

    /// Only report CVEs that have an update available
    #[arg(short, long)]
    pub updates: bool,

    /// Format output for Nagios NRPE
    #[arg(short, long)]
    pub nagios: bool,

    /// Reuse previously downloaded OVAL files
    #[arg(short, long)]
    pub reuse: bool,

    /// Scan a package manifest for this Ubuntu release instead of the local host
    #[arg(short, long, value_name = "CODENAME")]
    pub manifest: Option<String>,

    /// Manifest file to scan (requires --manifest)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable debug logging and verbose oscap output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (defaults to ./cvescan.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges config file defaults under the command-line values.
    ///
    /// An explicit `--priority` wins over the config file. Boolean flags are
    /// set when either source sets them.
    pub fn into_raw_arguments(self, config: Option<&ConfigFile>) -> Result<RawArguments> {
        let config_priority = match config {
            Some(config) => config.priority()?,
            None => None,
        };
        let enabled = |value: Option<bool>| value.unwrap_or(false);

        Ok(RawArguments {
            cve: self.cve,
            experimental: self.experimental || enabled(config.and_then(|c| c.experimental)),
            file: self.file,
            manifest: self.manifest,
            nagios: self.nagios,
            priority: self.priority.or(config_priority).unwrap_or_default(),
            reuse: self.reuse,
            silent: self.silent,
            test: self.test,
            updates: self.updates,
            verbose: self.verbose || enabled(config.and_then(|c| c.verbose)),
            list: self.list || enabled(config.and_then(|c| c.list)),
        })
    }
}
