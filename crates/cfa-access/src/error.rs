use cfa_core::{IdentityPayload, PayloadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("upstream identity error: {0}")]
    UpstreamIdentity(String),

    #[error("trace probe failed: {0}")]
    Trace(String),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Fail fast when the identity payload itself reports an upstream failure.
pub(crate) fn ensure_identity_ok(identity: &IdentityPayload) -> Result<(), ResolveError> {
    match identity.upstream_error() {
        Some(message) => Err(ResolveError::UpstreamIdentity(message)),
        None => Ok(()),
    }
}
