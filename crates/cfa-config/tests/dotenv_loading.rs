//! `.env` loading runs in its own test binary: dotenvy writes straight into
//! the process environment, outside what `Jail` restores.

use cfa_config::CfaConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn dotenv_in_working_directory_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "CFA_GENERAL__FORMAT=raw\n")?;

        let config = CfaConfig::load_with_dotenv().map_err(|e| e.to_string())?;
        assert_eq!(config.general.format, "raw");
        Ok(())
    });
}
