// src/cli.rs
use clap::Parser;

/// crtscan: crt.sh certificate lookup
///
/// Query crt.sh for certificates matching a domain pattern, probe each
/// common name for live HTTP reachability, and print a tabular report.
#[derive(Parser, Debug, Clone)]
#[command(name = "crtscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // ===== Query =====
    /// Domain pattern to search at crt.sh (e.g. example.com or %.example.com)
    #[arg(short = 'u', long = "url")]
    pub url: String,

    /// Keep rows with duplicated common names (true/false)
    #[arg(
        short = 'd',
        long = "duplicates",
        value_name = "BOOL",
        default_value_t = false,
        action = clap::ArgAction::Set,
        num_args = 1
    )]
    pub duplicates: bool,

    /// Include expired certificates in the results
    #[arg(long = "include-expired")]
    pub include_expired: bool,

    // ===== Input & Configuration =====
    /// Path to TOML config file (all fields optional)
    #[arg(short = 'c', long = "config", default_value = "crtscan.toml")]
    pub config: String,

    // ===== Probing =====
    /// Skip the per-host HTTP probe (status column stays empty)
    #[arg(long = "no-probe")]
    pub no_probe: bool,

    /// Override probe timeout in seconds
    #[arg(long = "probe-timeout")]
    pub probe_timeout: Option<u64>,

    // ===== Output Format =====
    /// Output sightings in JSONL format to stdout
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Output sightings in CSV format to stdout
    #[arg(long = "csv")]
    pub csv: bool,

    // ===== Output Destination =====
    /// Write output to file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    // ===== Display & Statistics =====
    /// Print run statistics to stderr when done
    #[arg(long = "stats")]
    pub stats: bool,

    /// Disable progress indicator
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    // ===== Logging =====
    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        // Cannot specify multiple output formats
        if self.json && self.csv {
            anyhow::bail!(
                "Cannot specify multiple output formats. \
                Choose one of: --json or --csv"
            );
        }

        if let Some(timeout) = self.probe_timeout {
            if timeout == 0 {
                anyhow::bail!("--probe-timeout must be greater than 0");
            }
        }

        // Verbose and quiet are mutually exclusive
        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        Ok(())
    }

    /// Determine the output format based on flags
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Human
        }
    }

    /// Check if progress indicator should be enabled
    pub fn should_show_progress(&self) -> bool {
        !self.no_progress && !self.json && !self.csv
    }

    /// Determine log level based on verbose/quiet flags
    pub fn log_level(&self) -> Option<&str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Grid-formatted table (default)
    Human,
    /// JSON Lines format (one JSON object per line)
    Json,
    /// CSV format
    Csv,
}
