use cfa_access::HttpTraceProbe;
use cfa_config::CfaConfig;

use crate::cli::root_commands::TraceUrlArgs;

/// Build the trace probe from config, applying a `--trace-url` override.
pub fn trace_probe(config: &CfaConfig, args: &TraceUrlArgs) -> anyhow::Result<HttpTraceProbe> {
    let mut trace = config.trace.clone();
    if let Some(url) = &args.trace_url {
        trace.url.clone_from(url);
    }
    trace.validate()?;
    Ok(HttpTraceProbe::from_config(&trace)?)
}
