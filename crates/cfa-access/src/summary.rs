use cfa_core::{AccessSummary, AdminDevicePayload, AdminPosturePayload, IdentityPayload};

use crate::device::resolve_device_info;
use crate::error::ResolveError;
use crate::posture::resolve_posture_info;
use crate::trace::TraceProbe;
use crate::warp::resolve_warp_info;

/// Inputs shared by all three resolvers for one page render.
#[derive(Debug, Clone, Copy)]
pub struct AccessRequest<'a> {
    pub identity: &'a IdentityPayload,
    pub device_id: Option<&'a str>,
    pub admin_device: Option<&'a AdminDevicePayload>,
    pub admin_posture: Option<&'a AdminPosturePayload>,
}

impl<'a> AccessRequest<'a> {
    #[must_use]
    pub const fn new(identity: &'a IdentityPayload) -> Self {
        Self {
            identity,
            device_id: None,
            admin_device: None,
            admin_posture: None,
        }
    }
}

/// Run the device, posture, and WARP resolvers for one request.
///
/// Resolvers run in that order and the first error aborts the summary.
///
/// # Errors
///
/// Returns the first `ResolveError` raised by any resolver.
pub async fn resolve_summary<P: TraceProbe>(
    request: AccessRequest<'_>,
    probe: &P,
) -> Result<AccessSummary, ResolveError> {
    let device = resolve_device_info(request.identity, request.device_id, request.admin_device)?;
    let posture = resolve_posture_info(request.identity, request.admin_posture)?;
    let user = resolve_warp_info(request.identity, probe).await?;
    Ok(AccessSummary {
        device,
        posture,
        user,
    })
}
