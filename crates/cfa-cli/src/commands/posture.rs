use cfa_access::resolve_posture_info;
use cfa_core::{AdminPosturePayload, ResolvedPostureInfo};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PostureArgs;
use crate::input;
use crate::output::output;

/// Handle `cfa posture`.
pub fn handle(args: &PostureArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args)?, flags.format)
}

fn run(args: &PostureArgs) -> anyhow::Result<ResolvedPostureInfo> {
    let identity = input::load_identity(&args.input.identity)?;
    let admin: Option<AdminPosturePayload> = input::load_admin(args.admin.as_deref())?;
    Ok(resolve_posture_info(&identity, admin.as_ref())?)
}
