//! Network trace probe configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Cloudflare's public diagnostic trace endpoint.
pub const DEFAULT_TRACE_URL: &str = "https://www.cloudflare.com/cdn-cgi/trace";

fn default_url() -> String {
    DEFAULT_TRACE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TraceConfig {
    /// Trace endpoint queried to detect WARP.
    #[serde(default = "default_url")]
    pub url: String,

    /// `User-Agent` header for the trace request. Empty uses the HTTP client default.
    #[serde(default)]
    pub user_agent: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: String::new(),
        }
    }
}

impl TraceConfig {
    /// Reject URLs the probe cannot issue a plain GET against.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `url` is empty or not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "trace.url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "trace.url".into(),
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        Some(self.user_agent.as_str()).filter(|ua| !ua.is_empty())
    }
}
