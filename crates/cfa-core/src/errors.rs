//! Payload decoding errors.
//!
//! Resolution errors live in `cfa-access`; this module only covers turning raw
//! JSON into the typed payload structs, either up front or when a resolver
//! reads a deferred field.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    /// The JSON text could not be parsed into the expected payload shape.
    #[error("invalid {kind} payload: {source}")]
    Json {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A field read by one resolver does not have the shape it expects.
    #[error("invalid `{field}` field: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    pub(crate) const fn json(kind: &'static str, source: serde_json::Error) -> Self {
        Self::Json { kind, source }
    }

    pub(crate) const fn field(field: &'static str, source: serde_json::Error) -> Self {
        Self::Field { field, source }
    }
}
