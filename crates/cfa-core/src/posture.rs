//! Device posture records and individual posture checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::truthy::is_truthy;

/// A posture source: the list of checks attested for one device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostureRecord {
    #[serde(default)]
    pub checks: Option<Vec<PostureCheck>>,
}

impl PostureRecord {
    /// Checks in payload order; empty when the record has none.
    #[must_use]
    pub fn checks(&self) -> &[PostureCheck] {
        self.checks.as_deref().unwrap_or_default()
    }

    /// First check matching `type == kind`, or whose lowercased name contains `needle`.
    #[must_use]
    pub fn find_check(&self, kind: &str, needle: &str) -> Option<&PostureCheck> {
        self.checks().iter().find(|check| check.matches(kind, needle))
    }
}

/// A single named security attestation.
///
/// `success` is kept as raw JSON because upstream sources are not consistent
/// about its type; see [`PostureCheck::passed`] and
/// [`PostureCheck::explicitly_failed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostureCheck {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub success: Option<Value>,
}

impl PostureCheck {
    #[must_use]
    pub fn matches(&self, kind: &str, needle: &str) -> bool {
        self.kind.as_deref() == Some(kind)
            || self
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(needle))
    }

    /// `true` when `success` is present and truthy.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.success.as_ref().is_some_and(is_truthy)
    }

    /// `true` only when `success` is the literal boolean `false`.
    #[must_use]
    pub fn explicitly_failed(&self) -> bool {
        matches!(self.success, Some(Value::Bool(false)))
    }
}
