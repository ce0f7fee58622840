//! # cfa-config
//!
//! Layered configuration loading for cfa using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CFA_*` prefix, `__` as separator)
//! 2. Project-level `.cfa/config.toml`
//! 3. User-level `~/.config/cfa/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CFA_TRACE__URL` -> `trace.url`, `CFA_GENERAL__FORMAT` -> `general.format`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cfa_config::CfaConfig;
//!
//! let config = CfaConfig::load_with_dotenv().expect("config");
//! println!("trace endpoint: {}", config.trace.url);
//! ```

mod error;
mod general;
mod trace;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use trace::{DEFAULT_TRACE_URL, TraceConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CfaConfig {
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CfaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse, or
    /// `ConfigError::InvalidValue` if the trace URL is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.trace.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // Missing `.env` is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".cfa/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CFA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cfa").join("config.toml"))
    }
}
