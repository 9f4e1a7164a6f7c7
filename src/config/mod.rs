use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Distinguishes runtime behavior for different stages of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for an embedding application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub policy: DraftPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut policy = DraftPolicy::default();
        if let Some(max_majors) = read_env_number("APP_MAX_MAJORS")? {
            policy.max_majors = max_majors;
        }
        if let Some(max_bytes) = read_env_number("APP_MAX_ATTACHMENT_BYTES")? {
            policy.max_attachment_bytes = max_bytes;
        }
        if let Some(max_chars) = read_env_number("APP_MAX_POSITION_CHARS")? {
            policy.max_position_chars = max_chars;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            policy,
        })
    }
}

fn read_env_number<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Dials governing draft validation: list ceilings, attachment size, entry length.
///
/// The defaults encode the recruiting product's rules. They are grouped in one
/// struct so tests can tighten or loosen a single dial without touching the
/// validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPolicy {
    pub max_majors: usize,
    pub max_attachment_bytes: u64,
    pub max_position_chars: usize,
}

impl Default for DraftPolicy {
    fn default() -> Self {
        Self {
            max_majors: 6,
            max_attachment_bytes: 5_000_000,
            max_position_chars: 100,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidEnvValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEnvValue { key, value } => {
                write!(f, "{key} has invalid value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
