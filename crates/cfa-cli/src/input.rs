//! Payload loading from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use cfa_core::{AdminApiPayload, IdentityPayload};
use serde::de::DeserializeOwned;

/// Path value that means "read stdin".
pub const STDIN: &str = "-";

/// Read raw text from `source`, or stdin when it is `-`.
pub fn read_source(source: &str) -> anyhow::Result<String> {
    if source == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read payload from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(Path::new(source))
        .with_context(|| format!("failed to read payload file {source}"))
}

pub fn load_identity(source: &str) -> anyhow::Result<IdentityPayload> {
    let text = read_source(source)?;
    IdentityPayload::from_json_str(&text)
        .with_context(|| format!("failed to parse identity payload from {}", describe(source)))
}

/// Load an optional admin API envelope. Admin payloads must come from files.
pub fn load_admin<T: DeserializeOwned>(
    source: Option<&str>,
) -> anyhow::Result<Option<AdminApiPayload<T>>> {
    let Some(source) = source else {
        return Ok(None);
    };
    if source == STDIN {
        anyhow::bail!("admin payloads must be read from a file; stdin is reserved for the identity payload");
    }

    let text = read_source(source)?;
    AdminApiPayload::from_json_str(&text)
        .map(Some)
        .with_context(|| format!("failed to parse admin payload from {}", describe(source)))
}

fn describe(source: &str) -> String {
    if source == STDIN {
        "stdin".to_string()
    } else {
        source.to_string()
    }
}
