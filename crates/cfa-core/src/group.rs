use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fallback::first_present;

/// Display name for a group entry that carries no usable label.
pub const UNKNOWN_GROUP: &str = "Unknown Group";

/// One element of the identity `groups` / `user_groups` list.
///
/// Identity providers emit either bare group names or group records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupEntry {
    Name(String),
    Record(GroupRecord),
    /// Anything else (`null`, numbers, records with non-string fields).
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl GroupEntry {
    /// Label shown for this group: the bare name, else `name` → `email` → `id`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Record(record) => first_present([
                record.name.as_deref(),
                record.email.as_deref(),
                record.id.as_deref(),
            ])
            .unwrap_or(UNKNOWN_GROUP)
            .to_string(),
            Self::Other(_) => UNKNOWN_GROUP.to_string(),
        }
    }
}
