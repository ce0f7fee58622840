use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod input;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("cfa error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    // Schema output is static; don't let a broken config block it.
    if let cli::Commands::Schema(args) = &cli.command {
        let flags = cli.global_flags(cli::OutputFormat::default());
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    let flags = cli.global_flags(bootstrap::configured_format(&config)?);
    tracing::debug!(trace_url = %config.trace.url, format = ?flags.format, "configuration loaded");

    commands::dispatch::dispatch(cli.command, &config, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CFA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
