//! Configuration for the `readview` binary.
//!
//! Values come from environment variables with defaults matching the
//! library's own. Command-line flags are layered on top in `main`.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

use url::Url;

use crate::article::{
    DEFAULT_CHAR_THRESHOLD, OPTION_CHAR_THRESHOLD, OPTION_SANITIZE, OPTION_URL,
};
use crate::reader::ExtractOptions;

pub const ENV_BASE_URL: &str = "READVIEW_BASE_URL";
pub const ENV_CHAR_THRESHOLD: &str = "READVIEW_CHAR_THRESHOLD";
pub const ENV_SANITIZE: &str = "READVIEW_SANITIZE";
pub const ENV_LOG_FORMAT: &str = "READVIEW_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: Option<Url>,
    char_threshold: usize,
    sanitize: bool,
    log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = match env::var(ENV_BASE_URL) {
            Ok(value) => Some(Url::parse(&value).map_err(|err| ConfigError::InvalidValue {
                field: ENV_BASE_URL,
                reason: err.to_string(),
            })?),
            Err(_) => None,
        };

        let char_threshold = match env::var(ENV_CHAR_THRESHOLD) {
            Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_CHAR_THRESHOLD,
                reason: format!("expected a non-negative integer, got '{value}'"),
            })?,
            Err(_) => DEFAULT_CHAR_THRESHOLD,
        };

        let sanitize = match env::var(ENV_SANITIZE) {
            Ok(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                field: ENV_SANITIZE,
                reason: format!("expected true/false, got '{value}'"),
            })?,
            Err(_) => true,
        };

        let log_format = match env::var(ENV_LOG_FORMAT).as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("text") | Err(_) => LogFormat::Text,
            Ok(other) => {
                return Err(ConfigError::InvalidValue {
                    field: ENV_LOG_FORMAT,
                    reason: format!("expected 'text' or 'json', got '{other}'"),
                });
            }
        };

        Ok(Self {
            base_url,
            char_threshold,
            sanitize,
            log_format,
        })
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }
    pub fn char_threshold(&self) -> usize {
        self.char_threshold
    }
    pub fn sanitize(&self) -> bool {
        self.sanitize
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub fn set_base_url(&mut self, url: Url) {
        self.base_url = Some(url);
    }
    pub fn set_char_threshold(&mut self, threshold: usize) {
        self.char_threshold = threshold;
    }
    pub fn set_sanitize(&mut self, sanitize: bool) {
        self.sanitize = sanitize;
    }

    /// Options understood by [`ReadabilityExtractor`](crate::article::ReadabilityExtractor).
    pub fn extract_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new()
            .with(OPTION_CHAR_THRESHOLD, self.char_threshold)
            .with(OPTION_SANITIZE, self.sanitize);
        if let Some(url) = &self.base_url {
            options.insert(OPTION_URL, url.as_str());
        }
        options
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            char_threshold: DEFAULT_CHAR_THRESHOLD,
            sanitize: true,
            log_format: LogFormat::Text,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
