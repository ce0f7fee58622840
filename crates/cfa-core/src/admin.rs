//! Envelopes for Cloudflare administrative API responses.
//!
//! The admin API wraps every record in `{ "result": ... }`; the rest of the
//! envelope (`success`, `errors`, `messages`) is ignored here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::device::DeviceRecord;
use crate::errors::PayloadError;
use crate::posture::PostureRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct AdminApiPayload<T> {
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> Default for AdminApiPayload<T> {
    fn default() -> Self {
        Self { result: None }
    }
}

/// Admin API response for a single registered device.
pub type AdminDevicePayload = AdminApiPayload<DeviceRecord>;

/// Admin API response for a device's posture.
pub type AdminPosturePayload = AdminApiPayload<PostureRecord>;

impl<T: DeserializeOwned> AdminApiPayload<T> {
    /// Parse an admin API envelope from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::Json` if the text is not valid JSON or `result`
    /// has an unexpected shape.
    pub fn from_json_str(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::json("admin API", e))
    }
}

impl<T> AdminApiPayload<T> {
    #[must_use]
    pub const fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }
}
