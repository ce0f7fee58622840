use cfa_core::{
    AdminApiPayload, AdminPosturePayload, IdentityPayload, PostureCheck, ResolvedPostureInfo,
};

use crate::error::{ResolveError, ensure_identity_ok};

/// Check `type` identifying the CrowdStrike sensor attestation.
pub const CROWDSTRIKE_CHECK: &str = "crowdstrike";
/// Check `type` identifying the OS version attestation.
pub const OS_VERSION_CHECK: &str = "os_version";

const CROWDSTRIKE_NAME: &str = "crowdstrike";
const OS_NAME: &str = "os";

/// Resolve the CrowdStrike and OS-version posture outcomes.
///
/// The posture source is the admin API `result` when present (replacing the
/// identity posture wholesale), else the identity's top-level
/// `device_posture`, else the first session device's `device_posture`.
///
/// `crowdstrikeEnabled` is `false` unless a matching check has a truthy
/// `success`. `osUpToDate` is `true` unless a matching check has
/// `success: false` exactly.
///
/// # Errors
///
/// Returns `ResolveError::UpstreamIdentity` if the identity payload carries an
/// error, or `ResolveError::Payload` if the identity posture it reads is
/// malformed. The error is logged before it is returned.
pub fn resolve_posture_info(
    identity: &IdentityPayload,
    admin: Option<&AdminPosturePayload>,
) -> Result<ResolvedPostureInfo, ResolveError> {
    evaluate(identity, admin)
        .inspect_err(|error| tracing::error!(%error, "error processing posture info"))
}

fn evaluate(
    identity: &IdentityPayload,
    admin: Option<&AdminPosturePayload>,
) -> Result<ResolvedPostureInfo, ResolveError> {
    ensure_identity_ok(identity)?;

    let (source, origin) = match admin.and_then(AdminApiPayload::result) {
        Some(record) => (record.clone(), "admin"),
        None => (identity.identity_posture()?.unwrap_or_default(), "identity"),
    };

    let crowdstrike_enabled = source
        .find_check(CROWDSTRIKE_CHECK, CROWDSTRIKE_NAME)
        .is_some_and(PostureCheck::passed);
    let os_up_to_date = !source
        .find_check(OS_VERSION_CHECK, OS_NAME)
        .is_some_and(PostureCheck::explicitly_failed);

    tracing::debug!(
        origin,
        checks = source.checks().len(),
        crowdstrike_enabled,
        os_up_to_date,
        "resolved posture info",
    );
    Ok(ResolvedPostureInfo {
        crowdstrike_enabled,
        os_up_to_date,
    })
}
