use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve device identity fields.
    Device(DeviceArgs),
    /// Resolve CrowdStrike and OS-version posture outcomes.
    Posture(PostureArgs),
    /// Resolve user fields and probe live WARP status.
    Warp(WarpArgs),
    /// Resolve device, posture, and WARP records together.
    Summary(SummaryArgs),
    /// Fetch and parse the diagnostic trace endpoint.
    Trace(TraceArgs),
    /// Print the JSON Schema of an output record.
    Schema(SchemaArgs),
}

/// Identity payload input shared by every resolver command.
#[derive(Clone, Debug, Args)]
pub struct IdentityArgs {
    /// Identity payload JSON file (`-` reads stdin).
    #[arg(short, long, default_value = "-")]
    pub identity: String,
}

/// Trace endpoint override shared by commands that probe WARP.
#[derive(Clone, Debug, Args)]
pub struct TraceUrlArgs {
    /// Trace endpoint URL (overrides `trace.url` from config).
    #[arg(long)]
    pub trace_url: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeviceArgs {
    #[command(flatten)]
    pub input: IdentityArgs,
    /// Device identifier known to the caller; takes precedence over payload ids.
    #[arg(long)]
    pub device_id: Option<String>,
    /// Admin API device response JSON file.
    #[arg(long)]
    pub admin: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PostureArgs {
    #[command(flatten)]
    pub input: IdentityArgs,
    /// Admin API posture response JSON file; replaces identity posture entirely.
    #[arg(long)]
    pub admin: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct WarpArgs {
    #[command(flatten)]
    pub input: IdentityArgs,
    #[command(flatten)]
    pub trace: TraceUrlArgs,
}

#[derive(Clone, Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: IdentityArgs,
    #[arg(long)]
    pub device_id: Option<String>,
    /// Admin API device response JSON file.
    #[arg(long)]
    pub admin_device: Option<String>,
    /// Admin API posture response JSON file.
    #[arg(long)]
    pub admin_posture: Option<String>,
    #[command(flatten)]
    pub trace: TraceUrlArgs,
}

#[derive(Clone, Debug, Args)]
pub struct TraceArgs {
    #[command(flatten)]
    pub trace: TraceUrlArgs,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Output record to describe.
    #[arg(value_enum)]
    pub record: SchemaRecord,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaRecord {
    Device,
    Posture,
    User,
    Summary,
}
