use cfa_access::{AccessRequest, resolve_summary};
use cfa_config::CfaConfig;
use cfa_core::{AdminDevicePayload, AdminPosturePayload};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SummaryArgs;
use crate::commands::shared::trace_probe;
use crate::input;
use crate::output::output;

/// Handle `cfa summary`.
pub async fn handle(
    args: &SummaryArgs,
    config: &CfaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = input::load_identity(&args.input.identity)?;
    let admin_device: Option<AdminDevicePayload> =
        input::load_admin(args.admin_device.as_deref())?;
    let admin_posture: Option<AdminPosturePayload> =
        input::load_admin(args.admin_posture.as_deref())?;
    let probe = trace_probe(config, &args.trace)?;

    let request = AccessRequest {
        identity: &identity,
        device_id: args.device_id.as_deref(),
        admin_device: admin_device.as_ref(),
        admin_posture: admin_posture.as_ref(),
    };
    let summary = resolve_summary(request, &probe).await?;
    output(&summary, flags.format)
}
