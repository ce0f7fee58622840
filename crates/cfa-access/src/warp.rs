use cfa_core::fallback::first_present_or_na;
use cfa_core::{GroupEntry, IdentityPayload, ResolvedUserWarpInfo};

use crate::error::{ResolveError, ensure_identity_ok};
use crate::trace::{TraceProbe, warp_enabled};

/// Resolve user identity fields and probe live WARP status.
///
/// The upstream-error check runs before the probe, so a failed identity never
/// causes network I/O. Exactly one trace request is issued otherwise.
///
/// # Errors
///
/// Returns `ResolveError::UpstreamIdentity` if the identity payload carries an
/// error, `ResolveError::Payload` if `groups`/`user_groups` is not a list, or
/// `ResolveError::Trace` if the probe fails. All are logged before being
/// returned.
pub async fn resolve_warp_info<P: TraceProbe>(
    identity: &IdentityPayload,
    probe: &P,
) -> Result<ResolvedUserWarpInfo, ResolveError> {
    gather(identity, probe)
        .await
        .inspect_err(|error| tracing::error!(%error, "error processing user info"))
}

async fn gather<P: TraceProbe>(
    identity: &IdentityPayload,
    probe: &P,
) -> Result<ResolvedUserWarpInfo, ResolveError> {
    ensure_identity_ok(identity)?;

    let groups = identity.group_entries()?;
    let body = probe.fetch_trace().await?;
    let is_warp_enabled = warp_enabled(&body);

    let info = ResolvedUserWarpInfo {
        user_name: first_present_or_na([identity.name.as_deref()]),
        user_email: first_present_or_na([identity.email.as_deref()]),
        is_warp_enabled,
        user_groups: group_names(&groups),
    };

    tracing::debug!(
        is_warp_enabled,
        groups = info.user_groups.len(),
        "resolved user info",
    );
    Ok(info)
}

/// Display names for group entries, in input order.
#[must_use]
pub fn group_names(entries: &[GroupEntry]) -> Vec<String> {
    entries.iter().map(GroupEntry::display_name).collect()
}
