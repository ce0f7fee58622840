use cfa_core::{AccessSummary, ResolvedDeviceInfo, ResolvedPostureInfo, ResolvedUserWarpInfo};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaRecord};
use crate::output::output;

/// Handle `cfa schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.record), flags.format)
}

fn schema(record: SchemaRecord) -> Schema {
    match record {
        SchemaRecord::Device => schema_for!(ResolvedDeviceInfo),
        SchemaRecord::Posture => schema_for!(ResolvedPostureInfo),
        SchemaRecord::User => schema_for!(ResolvedUserWarpInfo),
        SchemaRecord::Summary => schema_for!(AccessSummary),
    }
}
