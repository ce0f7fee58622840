use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cfa` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cfa",
    version,
    about = "Resolve device, posture, and WARP status from Cloudflare Access payloads"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to `general.format` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags, falling back to `configured` for the format.
    #[must_use]
    pub fn global_flags(&self, configured: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(configured),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::root_commands::SchemaRecord;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["cfa", "--format", "raw", "--verbose", "trace"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Trace(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cfa", "posture", "-i", "id.json", "--quiet"])
            .expect("cli should parse");

        assert!(cli.quiet);
        let Commands::Posture(args) = cli.command else {
            panic!("expected posture command");
        };
        assert_eq!(args.input.identity, "id.json");
        assert!(args.admin.is_none());
    }

    #[test]
    fn identity_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["cfa", "warp"]).expect("cli should parse");
        let Commands::Warp(args) = cli.command else {
            panic!("expected warp command");
        };
        assert_eq!(args.input.identity, "-");
        assert!(args.trace.trace_url.is_none());
    }

    #[test]
    fn device_command_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "cfa",
            "device",
            "--identity",
            "id.json",
            "--device-id",
            "EXP1",
            "--admin",
            "admin.json",
        ])
        .expect("cli should parse");

        let Commands::Device(args) = cli.command else {
            panic!("expected device command");
        };
        assert_eq!(args.device_id.as_deref(), Some("EXP1"));
        assert_eq!(args.admin.as_deref(), Some("admin.json"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["cfa", "--format", "table", "trace"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn schema_requires_known_record() {
        let cli = Cli::try_parse_from(["cfa", "schema", "summary"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(ref args) if args.record == SchemaRecord::Summary
        ));
        assert!(Cli::try_parse_from(["cfa", "schema", "tokens"]).is_err());
    }

    #[test]
    fn format_flag_overrides_configured_default() {
        let cli = Cli::try_parse_from(["cfa", "trace"]).expect("cli should parse");
        assert_eq!(cli.global_flags(OutputFormat::Raw).format, OutputFormat::Raw);

        let cli = Cli::try_parse_from(["cfa", "-f", "json", "trace"]).expect("cli should parse");
        assert_eq!(cli.global_flags(OutputFormat::Raw).format, OutputFormat::Json);
    }
}
