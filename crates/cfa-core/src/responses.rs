//! Output records returned by the resolvers.
//!
//! These are the JSON shapes handed to the presentation layer, so field names
//! serialize in camelCase (`deviceId`, `osUpToDate`, `isWarpEnabled`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Device identity fields, each defaulted to `"N/A"` when unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDeviceInfo {
    pub device_id: String,
    pub device_name: String,
    pub device_model: String,
    pub device_os_version: String,
    pub device_serial: String,
}

/// Outcome of the two posture checks surfaced to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPostureInfo {
    pub crowdstrike_enabled: bool,
    pub os_up_to_date: bool,
}

/// User identity plus live WARP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedUserWarpInfo {
    pub user_name: String,
    pub user_email: String,
    pub is_warp_enabled: bool,
    pub user_groups: Vec<String>,
}

/// All three records resolved from one set of payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccessSummary {
    pub device: ResolvedDeviceInfo,
    pub posture: ResolvedPostureInfo,
    pub user: ResolvedUserWarpInfo,
}
