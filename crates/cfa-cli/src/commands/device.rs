use cfa_access::resolve_device_info;
use cfa_core::{AdminDevicePayload, ResolvedDeviceInfo};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeviceArgs;
use crate::input;
use crate::output::output;

/// Handle `cfa device`.
pub fn handle(args: &DeviceArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args)?, flags.format)
}

fn run(args: &DeviceArgs) -> anyhow::Result<ResolvedDeviceInfo> {
    let identity = input::load_identity(&args.input.identity)?;
    let admin: Option<AdminDevicePayload> = input::load_admin(args.admin.as_deref())?;
    Ok(resolve_device_info(
        &identity,
        args.device_id.as_deref(),
        admin.as_ref(),
    )?)
}
