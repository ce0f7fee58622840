use cfa_access::trace::warp_enabled;
use cfa_access::{TraceProbe, TraceReport};
use cfa_config::CfaConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TraceArgs;
use crate::commands::shared::trace_probe;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceResponse {
    url: String,
    is_warp_enabled: bool,
    fields: TraceReport,
}

/// Handle `cfa trace`.
pub async fn handle(args: &TraceArgs, config: &CfaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let probe = trace_probe(config, &args.trace)?;
    let body = probe.fetch_trace().await?;

    output(
        &TraceResponse {
            url: probe.url().to_string(),
            is_warp_enabled: warp_enabled(&body),
            fields: TraceReport::parse(&body),
        },
        flags.format,
    )
}
