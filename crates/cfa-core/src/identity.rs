use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::device::DeviceRecord;
use crate::errors::PayloadError;
use crate::group::GroupEntry;
use crate::posture::PostureRecord;
use crate::truthy::is_truthy;

/// Session/identity record returned by Cloudflare Access identity introspection.
///
/// Supplied by the caller; cfa never fetches it. Unknown fields are ignored.
///
/// `device_posture`, `groups` and `user_groups` stay raw JSON until a resolver
/// reads them, so a malformed group list cannot break device resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityPayload {
    /// Set by the upstream when identity lookup failed.
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub device_sessions: Option<Vec<DeviceSession>>,
    #[serde(default)]
    pub device_posture: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub groups: Option<Value>,
    #[serde(default)]
    pub user_groups: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSession {
    #[serde(default)]
    pub device: Option<DeviceRecord>,
}

impl IdentityPayload {
    /// Parse an identity payload from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::Json` if the text is not valid JSON or a known
    /// field has an unexpected type.
    pub fn from_json_str(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::json("identity", e))
    }

    /// The upstream error message, if the payload signals one.
    ///
    /// String errors are returned verbatim; any other truthy value is rendered
    /// as JSON text.
    #[must_use]
    pub fn upstream_error(&self) -> Option<String> {
        let error = self.error.as_ref().filter(|v| is_truthy(v))?;
        Some(match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        })
    }

    /// Device record of the first device session, if any.
    #[must_use]
    pub fn session_device(&self) -> Option<&DeviceRecord> {
        self.device_sessions
            .as_deref()
            .and_then(<[DeviceSession]>::first)
            .and_then(|session| session.device.as_ref())
    }

    /// Posture record carried by the identity itself: a truthy top-level
    /// `device_posture` first, then the first session device's.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::Field` if the selected posture is not a posture
    /// record.
    pub fn identity_posture(&self) -> Result<Option<PostureRecord>, PayloadError> {
        let raw = truthy_field(self.device_posture.as_ref()).or_else(|| {
            self.session_device()
                .and_then(|device| truthy_field(device.device_posture.as_ref()))
        });
        raw.map(|value| decode_field("device_posture", value)).transpose()
    }

    /// Group entries: a truthy `groups` (even an empty list), else
    /// `user_groups`, else none.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::Field` if the selected value is not a list.
    pub fn group_entries(&self) -> Result<Vec<GroupEntry>, PayloadError> {
        if let Some(groups) = truthy_field(self.groups.as_ref()) {
            return decode_field("groups", groups);
        }
        truthy_field(self.user_groups.as_ref())
            .map(|groups| decode_field("user_groups", groups))
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

fn truthy_field(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| is_truthy(v))
}

fn decode_field<T: DeserializeOwned>(field: &'static str, value: &Value) -> Result<T, PayloadError> {
    T::deserialize(value).map_err(|e| PayloadError::field(field, e))
}
