//! `s3addr config` – show where config lives and what is in effect.

use anyhow::Result;
use s3addr_core::config::S3AddrConfig;
use std::path::Path;

pub fn run_config(path: &Path, cfg: &S3AddrConfig) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
