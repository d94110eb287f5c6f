//! CLI parse tests.

use super::{Cli, CliCommand, FormatArg};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_addresses() {
    match parse(&["s3addr", "parse", "s3://b/k", "arn:aws:s3:::b/k"]).command {
        CliCommand::Parse {
            addresses,
            format,
            pretty,
        } => {
            assert_eq!(addresses, vec!["s3://b/k", "arn:aws:s3:::b/k"]);
            assert!(format.is_none());
            assert!(!pretty);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_format_json_pretty() {
    match parse(&["s3addr", "parse", "--format", "json", "--pretty", "-"]).command {
        CliCommand::Parse {
            addresses,
            format,
            pretty,
        } => {
            assert_eq!(addresses, vec!["-"]);
            assert_eq!(format, Some(FormatArg::Json));
            assert!(pretty);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_requires_address() {
    assert!(Cli::try_parse_from(["s3addr", "parse"]).is_err());
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["s3addr", "parse", "--format", "yaml", "s3://b/k"]).is_err());
}

#[test]
fn cli_config_with_global_flags() {
    let cli = parse(&["s3addr", "config", "--config", "/tmp/s3addr.toml", "--log-file"]);
    assert!(matches!(cli.command, CliCommand::Config));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/s3addr.toml")));
    assert!(cli.log_file);
}
