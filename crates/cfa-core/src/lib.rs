//! # cfa-core
//!
//! Core types shared across the cfa crates.
//!
//! This crate provides:
//! - Input payload structs for Cloudflare Access identity and admin API responses
//! - Output records returned by the resolvers (`ResolvedDeviceInfo`, etc.)
//! - Fallback helpers that pick the first present value from a priority chain
//! - Payload decoding errors

pub mod admin;
pub mod device;
pub mod errors;
pub mod fallback;
pub mod group;
pub mod identity;
pub mod posture;
pub mod responses;
mod truthy;

pub use admin::{AdminApiPayload, AdminDevicePayload, AdminPosturePayload};
pub use device::DeviceRecord;
pub use errors::PayloadError;
pub use group::{GroupEntry, GroupRecord};
pub use identity::{DeviceSession, IdentityPayload};
pub use posture::{PostureCheck, PostureRecord};
pub use responses::{AccessSummary, ResolvedDeviceInfo, ResolvedPostureInfo, ResolvedUserWarpInfo};

/// Placeholder for any string field no source could resolve.
pub const NOT_AVAILABLE: &str = "N/A";
