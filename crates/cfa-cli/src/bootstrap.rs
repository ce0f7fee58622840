use anyhow::Context;
use cfa_config::CfaConfig;
use clap::ValueEnum;

use crate::cli::OutputFormat;

/// Load layered configuration (`.env`, TOML files, `CFA_*` env vars).
pub fn load_config() -> anyhow::Result<CfaConfig> {
    CfaConfig::load_with_dotenv().context("failed to load cfa configuration")
}

/// Output format named by `general.format`.
pub fn configured_format(config: &CfaConfig) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_str(&config.general.format, true).map_err(|_| {
        anyhow::anyhow!(
            "invalid general.format '{}': expected json or raw",
            config.general.format
        )
    })
}
