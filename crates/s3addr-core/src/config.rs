use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How parsed addresses are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration loaded from `~/.config/s3addr/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3AddrConfig {
    /// Default output format for `s3addr parse`.
    #[serde(default)]
    pub output: OutputFormat,
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
    /// Log filter directive (e.g. "debug"); `RUST_LOG` takes precedence.
    #[serde(default)]
    pub log_filter: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("s3addr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<S3AddrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = S3AddrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from `path`. A missing file yields defaults and is not created.
pub fn load_from(path: &Path) -> Result<S3AddrConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(S3AddrConfig::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: S3AddrConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = S3AddrConfig::default();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!(!cfg.pretty);
        assert!(cfg.log_filter.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = S3AddrConfig {
            output: OutputFormat::Json,
            pretty: true,
            log_filter: Some("debug".into()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: S3AddrConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.output, OutputFormat::Json);
        assert!(parsed.pretty);
        assert_eq!(parsed.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn config_toml_partial() {
        let cfg: S3AddrConfig = toml::from_str(r#"output = "json""#).unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(!cfg.pretty);

        let cfg: S3AddrConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.output, OutputFormat::Text);
    }

    #[test]
    fn config_toml_rejects_unknown_format() {
        assert!(toml::from_str::<S3AddrConfig>(r#"output = "yaml""#).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"output = \"json\"\npretty = true\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(cfg.pretty);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!(!path.exists());
    }
}
