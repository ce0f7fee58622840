//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use cfa_config::{CfaConfig, ConfigError, DEFAULT_TRACE_URL};
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_trace_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[trace]
url = "http://127.0.0.1:9000/cdn-cgi/trace"
user_agent = "cfa-test/1.0"
"#,
        )?;

        let config: CfaConfig = Figment::from(Serialized::defaults(CfaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.trace.url, "http://127.0.0.1:9000/cdn-cgi/trace");
        assert_eq!(config.trace.user_agent(), Some("cfa-test/1.0"));
        assert_eq!(config.general.format, "json");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
format = "raw"
"#,
        )?;

        let config: CfaConfig = Figment::from(Serialized::defaults(CfaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.format, "raw");
        assert_eq!(config.trace.url, DEFAULT_TRACE_URL);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[trace]
url = "http://from-toml.local/cdn-cgi/trace"
"#,
        )?;
        jail.set_env("CFA_TRACE__URL", "http://from-env.local/cdn-cgi/trace");

        let config: CfaConfig = Figment::from(Serialized::defaults(CfaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("CFA_").split("__"))
            .extract()?;

        assert_eq!(config.trace.url, "http://from-env.local/cdn-cgi/trace");
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cfa")?;
        jail.create_file(
            ".cfa/config.toml",
            r#"
[trace]
url = "http://project.local/cdn-cgi/trace"
"#,
        )?;

        let config = CfaConfig::load().expect("config loads");
        assert_eq!(config.trace.url, "http://project.local/cdn-cgi/trace");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_trace_url() {
    Jail::expect_with(|jail| {
        jail.set_env("CFA_TRACE__URL", "not-a-url");

        let err = CfaConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "trace.url"));
        Ok(())
    });
}
