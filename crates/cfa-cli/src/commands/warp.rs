use cfa_access::resolve_warp_info;
use cfa_config::CfaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WarpArgs;
use crate::commands::shared::trace_probe;
use crate::input;
use crate::output::output;

/// Handle `cfa warp`.
pub async fn handle(args: &WarpArgs, config: &CfaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = input::load_identity(&args.input.identity)?;
    let probe = trace_probe(config, &args.trace)?;
    let info = resolve_warp_info(&identity, &probe).await?;
    output(&info, flags.format)
}
