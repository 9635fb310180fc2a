use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Default request body limit: 10 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which linguistic-analysis capability the process starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NlpBackend {
    /// Built-in rule-based English analyzer.
    Rules,
    /// No linguistic analysis; keyword and verb detection fall back to raw tokens.
    Disabled,
}

impl NlpBackend {
    pub fn is_available(self) -> bool {
        matches!(self, NlpBackend::Rules)
    }
}

impl FromStr for NlpBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" => Ok(NlpBackend::Rules),
            "none" | "off" | "disabled" => Ok(NlpBackend::Disabled),
            other => bail!("NLP_BACKEND must be 'rules' or 'none', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every value has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub nlp_backend: NlpBackend,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            nlp_backend: std::env::var("NLP_BACKEND")
                .unwrap_or_else(|_| "rules".to_string())
                .parse()?,
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            nlp_backend: NlpBackend::Rules,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nlp_backend_parses_known_values() {
        assert_eq!("rules".parse::<NlpBackend>().unwrap(), NlpBackend::Rules);
        assert_eq!(" RULES ".parse::<NlpBackend>().unwrap(), NlpBackend::Rules);
        assert_eq!("none".parse::<NlpBackend>().unwrap(), NlpBackend::Disabled);
        assert_eq!("off".parse::<NlpBackend>().unwrap(), NlpBackend::Disabled);
    }

    #[test]
    fn test_nlp_backend_rejects_unknown() {
        let err = "spacy".parse::<NlpBackend>().unwrap_err();
        assert!(err.to_string().contains("spacy"));
    }

    #[test]
    fn test_availability() {
        assert!(NlpBackend::Rules.is_available());
        assert!(!NlpBackend::Disabled.is_available());
    }

    #[test]
    fn test_default_config() {
        let c = Config::default();
        assert_eq!(c.port, 8080);
        assert_eq!(c.nlp_backend, NlpBackend::Rules);
        assert_eq!(c.max_upload_bytes, 10 * 1024 * 1024);
    }
}
