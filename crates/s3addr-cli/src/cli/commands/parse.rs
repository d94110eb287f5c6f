//! `s3addr parse` – print bucket, key and region for each address.

use anyhow::{Context, Result};
use s3addr_core::config::OutputFormat;
use s3addr_core::{parse_address, ParsedAddress};
use std::io::{self, BufRead, Write};

const STDIN_MARKER: &str = "-";

pub fn run_parse(addresses: &[String], format: OutputFormat, pretty: bool) -> Result<()> {
    let addresses = if addresses.len() == 1 && addresses[0] == STDIN_MARKER {
        read_addresses(io::stdin().lock())?
    } else {
        addresses.to_vec()
    };
    let stdout = io::stdout();
    write_parsed(&mut stdout.lock(), &addresses, format, pretty)
}

/// Non-blank lines of `reader`, trimmed.
fn read_addresses<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line.context("read addresses from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            addresses.push(line.to_string());
        }
    }
    Ok(addresses)
}

/// Stops at the first address that fails to parse.
fn write_parsed<W: Write>(
    out: &mut W,
    addresses: &[String],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    for address in addresses {
        let parsed = parse_address(address).with_context(|| format!("parse {address}"))?;
        writeln!(out, "{}", render(parsed.as_ref(), format, pretty)?)?;
    }
    Ok(())
}

fn render(parsed: Option<&ParsedAddress>, format: OutputFormat, pretty: bool) -> Result<String> {
    Ok(match (format, parsed) {
        (OutputFormat::Text, Some(parsed)) => parsed.to_string(),
        (OutputFormat::Text, None) => "unrecognized host".to_string(),
        (OutputFormat::Json, parsed) if pretty => serde_json::to_string_pretty(&parsed)?,
        (OutputFormat::Json, parsed) => serde_json::to_string(&parsed)?,
    })
}
