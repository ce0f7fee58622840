//! Cloudflare diagnostic trace probe.
//!
//! The trace endpoint returns a plain-text `key=value` listing describing the
//! connection as Cloudflare sees it; `warp=on` means the request arrived
//! through the WARP tunnel. The probe is a single unauthenticated GET with no
//! retry and no timeout.

use std::collections::BTreeMap;

use cfa_config::TraceConfig;
use serde::Serialize;

use crate::error::ResolveError;

/// Substring of the trace body that marks an active WARP tunnel.
pub const WARP_MARKER: &str = "warp=on";

/// Source of the raw trace body.
///
/// [`HttpTraceProbe`] is the real implementation; callers may supply their own
/// (for example a recorded body in tests).
pub trait TraceProbe {
    /// Fetch the trace body as text.
    fn fetch_trace(&self) -> impl Future<Output = Result<String, ResolveError>> + Send;
}

/// Trace probe backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTraceProbe {
    client: reqwest::Client,
    url: String,
}

impl HttpTraceProbe {
    /// Probe `url` with a default client.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Build a probe from the `[trace]` config section.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Trace` if the HTTP client cannot be constructed.
    pub fn from_config(config: &TraceConfig) -> Result<Self, ResolveError> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|e| ResolveError::Trace(format!("build client: {e}")))?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TraceProbe for HttpTraceProbe {
    async fn fetch_trace(&self) -> Result<String, ResolveError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ResolveError::Trace(format!("GET {}: {e}", self.url)))?;

        // Non-2xx bodies are still read; they simply won't carry the marker.
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, %status, "trace endpoint returned non-success status");
        }

        resp.text()
            .await
            .map_err(|e| ResolveError::Trace(format!("read body from {}: {e}", self.url)))
    }
}

/// `true` iff the trace body reports an active WARP tunnel.
#[must_use]
pub fn warp_enabled(body: &str) -> bool {
    body.contains(WARP_MARKER)
}

/// Parsed `key=value` fields of a trace body.
///
/// Lines without `=` are skipped; a repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TraceReport {
    fields: BTreeMap<String, String>,
}

impl TraceReport {
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let fields = body
            .lines()
            .filter_map(|line| line.trim().split_once('='))
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { fields }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// `warp` field: `on`, `off`, or `plus`.
    #[must_use]
    pub fn warp(&self) -> Option<&str> {
        self.get("warp")
    }

    /// `gateway` field: whether Gateway filtering applied to the request.
    #[must_use]
    pub fn gateway(&self) -> Option<&str> {
        self.get("gateway")
    }

    #[must_use]
    pub fn colo(&self) -> Option<&str> {
        self.get("colo")
    }

    #[must_use]
    pub fn ip(&self) -> Option<&str> {
        self.get("ip")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
