// src/config.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct CrtShConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_query_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_exclude_expired")]
    pub exclude_expired: bool,
}

fn default_base_url() -> String {
    "https://crt.sh".to_string()
}
fn default_query_timeout() -> u64 { 30 }
fn default_user_agent() -> String {
    // crt.sh is faster to reject requests with no UA at all
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:101.0) Gecko/20100101 Firefox/101.0"
        .to_string()
}
fn default_exclude_expired() -> bool { true }

impl Default for CrtShConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_query_timeout(),
            user_agent: default_user_agent(),
            exclude_expired: default_exclude_expired(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProbeConfig {
    #[serde(default = "default_probe_enabled")]
    pub enabled: bool,
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_probe_scheme")]
    pub scheme: String,
}

fn default_probe_enabled() -> bool { true }
fn default_probe_timeout() -> u64 { 5 }
fn default_probe_scheme() -> String {
    "https".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: default_probe_enabled(),
            timeout_secs: default_probe_timeout(),
            scheme: default_probe_scheme(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub crtsh: CrtShConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&contents)?;
        Ok(cfg)
    }

    /// Load the config file if present, defaults otherwise. A file that
    /// exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_from_valid_toml() {
        let toml_content = r#"
[crtsh]
base_url = "https://crt.example"
timeout_secs = 10
exclude_expired = false

[probe]
enabled = false
timeout_secs = 2
scheme = "http"

[logging]
level = "debug"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();

        assert_eq!(config.crtsh.base_url, "https://crt.example");
        assert_eq!(config.crtsh.timeout_secs, 10);
        assert!(!config.crtsh.exclude_expired);
        assert!(!config.probe.enabled);
        assert_eq!(config.probe.timeout_secs, 2);
        assert_eq!(config.probe.scheme, "http");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_empty_toml_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"").unwrap();
        temp_file.flush().unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();

        assert_eq!(config.crtsh.base_url, "https://crt.sh");
        assert_eq!(config.crtsh.timeout_secs, 30);
        assert!(config.crtsh.exclude_expired);
        assert!(config.probe.enabled);
        assert_eq!(config.probe.timeout_secs, 5);
        assert_eq!(config.probe.scheme, "https");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_partial_section() {
        let toml_content = r#"
[probe]
timeout_secs = 3
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();

        assert_eq!(config.probe.timeout_secs, 3);
        assert!(config.probe.enabled);
        assert_eq!(config.crtsh.base_url, "https://crt.sh");
    }

    #[test]
    fn test_config_invalid_toml() {
        let toml_content = "invalid toml content {{{";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = Config::from_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/crtscan.toml")).unwrap();
        assert_eq!(config.crtsh.base_url, "https://crt.sh");
    }

    #[test]
    fn test_load_or_default_invalid_file_is_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{{{").unwrap();
        temp_file.flush().unwrap();

        let result = Config::load_or_default(temp_file.path());
        assert!(result.is_err());
    }
}
