//! CLI for the s3addr address parser.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use s3addr_core::config::{self, OutputFormat};
use s3addr_core::logging;
use std::path::PathBuf;

use commands::{run_config, run_parse};

/// Top-level CLI for s3addr.
#[derive(Debug, Parser)]
#[command(name = "s3addr")]
#[command(about = "s3addr: parse S3 URLs, URIs and ARNs into bucket, key and region", long_about = None)]
pub struct Cli {
    /// Read configuration from PATH instead of ~/.config/s3addr/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to ~/.local/state/s3addr/s3addr.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse one or more addresses. Use `-` to read addresses from stdin, one per line.
    Parse {
        /// https:// URL, s3:// URI or arn: resource name.
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Output format (defaults to the configured one).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Pretty-print JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Show the config file path and effective configuration.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let (cfg, cfg_path) = match &cli.config {
            Some(path) => (config::load_from(path)?, path.clone()),
            None => (config::load_or_init()?, config::config_path()?),
        };
        start_logging(cfg.log_filter.as_deref(), cli.log_file);
        tracing::debug!("loaded config from {}: {:?}", cfg_path.display(), cfg);

        match cli.command {
            CliCommand::Parse {
                addresses,
                format,
                pretty,
            } => {
                let format = format.map(OutputFormat::from).unwrap_or(cfg.output);
                run_parse(&addresses, format, pretty || cfg.pretty)?;
            }
            CliCommand::Config => run_config(&cfg_path, &cfg)?,
        }

        Ok(())
    }
}

/// File logging when requested, falling back to stderr so the CLI doesn't crash.
fn start_logging(filter: Option<&str>, to_file: bool) {
    if to_file {
        match logging::init_file_logging(filter) {
            Ok(_) => return,
            Err(e) => eprintln!("s3addr: file logging unavailable ({e:#}), logging to stderr"),
        }
    }
    if let Err(e) = logging::init_logging(filter) {
        eprintln!("s3addr: {e:#}");
    }
}

#[cfg(test)]
mod tests;
