use cfa_config::CfaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &CfaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Device(args) => commands::device::handle(&args, flags),
        Commands::Posture(args) => commands::posture::handle(&args, flags),
        Commands::Warp(args) => commands::warp::handle(&args, config, flags).await,
        Commands::Summary(args) => commands::summary::handle(&args, config, flags).await,
        Commands::Trace(args) => commands::trace::handle(&args, config, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
