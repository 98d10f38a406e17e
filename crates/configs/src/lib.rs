//! # configs
//!
//! Layered settings for the social ledger binary.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `social-ledger.toml` in the working directory, or the file named by
//!    `SOCIAL_LEDGER_CONFIG` (optional)
//! 3. `SOCIAL_LEDGER__SECTION__KEY` environment variables, after `.env` is loaded

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use ledger_core::{LedgerPolicy, MembershipCheck};
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "SOCIAL_LEDGER";
pub const CONFIG_PATH_VAR: &str = "SOCIAL_LEDGER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "social-ledger";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ledger: LedgerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LedgerSettings {
    /// `record` or `id`
    pub membership: MembershipCheck,
    pub reject_duplicate_user_ids: bool,
}

impl From<&LedgerSettings> for LedgerPolicy {
    fn from(s: &LedgerSettings) -> Self {
        LedgerPolicy {
            membership: s.membership,
            reject_duplicate_user_ids: s.reject_duplicate_user_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `ledger_core=debug`
    pub filter: String,
    /// Emit newline-delimited JSON instead of human-readable lines
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Loads `.env`, the optional config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        let file = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let builder = Config::builder()
            .add_source(File::with_name(&file).required(false))
            .add_source(env_source());

        Self::build(builder)
    }

    /// Deserializes whatever sources `builder` carries on top of the defaults.
    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    pub fn ledger_policy(&self) -> LedgerPolicy {
        LedgerPolicy::from(&self.ledger)
    }
}

/// The environment layer, `SOCIAL_LEDGER__LEDGER__MEMBERSHIP=id` style.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
