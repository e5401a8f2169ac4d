//! Configuration
//!
//! JSON設定ファイルの読み込み。全フィールドに既定値があるため設定ファイルは省略可能

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::domain::services::session_filter::DEFAULT_TALK_KEYWORDS;

pub const DEFAULT_SESSION_URL_PREFIX: &str = "https://meetings.siam.org/sess";
pub const DEFAULT_USER_AGENT: &str = concat!("siamprog/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the HTML file is written to
    pub output_dir: String,
    /// Session pages fetched in parallel
    pub max_concurrent_requests: usize,
    /// Retries for transient HTTP failures (0 disables retrying)
    pub max_retries: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,

    // Extraction
    pub session_url_prefix: String,
    pub talk_session_keywords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            max_concurrent_requests: 10,
            max_retries: 3,
            request_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            session_url_prefix: DEFAULT_SESSION_URL_PREFIX.to_string(),
            talk_session_keywords: DEFAULT_TALK_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// `--config` が指定されていれば読み込み、なければ既定値
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.max_concurrent_requests, 10);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.session_url_prefix, "https://meetings.siam.org/sess");
        assert!(config.talk_session_keywords.contains(&"ALENEX".to_string()));
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "output_dir": "html", "max_retries": 0 }"#)
            .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.output_dir, "html");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.max_concurrent_requests, 10);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/siamprog.json").is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config.output_dir, ".");
    }
}
