//! # cfa-access
//!
//! Resolves device identity, device posture, and user/WARP status from a
//! Cloudflare Access identity payload, optionally overridden by admin API
//! payloads.
//!
//! Each resolver is independent and stateless:
//! - [`resolve_device_info`] — explicit id → admin API → session → `"N/A"` per field
//! - [`resolve_posture_info`] — CrowdStrike and OS-version check outcomes
//! - [`resolve_warp_info`] — user fields plus one live trace request
//!
//! An identity payload carrying `error` fails every resolver with
//! [`ResolveError::UpstreamIdentity`]; no partial result is ever returned.

pub mod device;
pub mod error;
pub mod posture;
pub mod summary;
pub mod trace;
pub mod warp;

pub use device::resolve_device_info;
pub use error::ResolveError;
pub use posture::resolve_posture_info;
pub use summary::{AccessRequest, resolve_summary};
pub use trace::{HttpTraceProbe, TraceProbe, TraceReport};
pub use warp::resolve_warp_info;
