#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use learnlog_core::config::resolve_config;
use output::{CliError, OutputMode};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "learnlog: filter and inspect learner interaction logs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format: pretty, text, or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for `--format json`).
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Output mode named on the command line, if any.
    fn explicit_output(&self) -> Option<&'static str> {
        output::explicit_mode(self.format, self.json).map(OutputMode::as_str)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Read",
        about = "List interactions",
        long_about = "List interactions from a JSON or JSON Lines log, optionally scoped to one item.",
        after_help = "EXAMPLES:\n    # List every interaction in a log\n    learnlog list --file interactions.jsonl\n\n    # Only interactions with item 3\n    learnlog list --file interactions.jsonl --item-id 3\n\n    # Emit machine-readable output\n    learnlog list --file interactions.jsonl --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Config",
        about = "Inspect configuration",
        long_about = "Show the effective project and user configuration.",
        after_help = "EXAMPLES:\n    # Show resolved configuration\n    learnlog config show\n\n    # Show project config only\n    learnlog config show --project"
    )]
    Config(cmd::config::ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("LEARNLOG_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "learnlog=debug,info"
        } else {
            "learnlog=info,warn"
        })
    });

    let format = env::var("LEARNLOG_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project_root = env::current_dir()?;
    let effective = resolve_config(&project_root, cli.explicit_output());
    let output = effective.as_ref().map_or_else(
        |_| output::resolve_output_mode(cli.format, cli.json, None),
        |config| OutputMode::from_resolved(&config.resolved_output),
    );
    debug!(output = output.as_str(), "resolved output mode");

    let command_result = effective.and_then(|config| match &cli.command {
        Commands::List(args) => {
            cmd::list::run_list(args, output, &config.project, &project_root)
        }
        Commands::Config(args) => cmd::config::run_config(args, &config, output),
    });

    if let Err(err) = command_result {
        output::render_error(output, &CliError::from(&err))?;
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_subcommand_parses() {
        let cli = Cli::parse_from(["learnlog", "list", "--file", "logs.jsonl"]);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn config_show_parses() {
        let cli = Cli::parse_from(["learnlog", "config", "show", "--project"]);
        assert!(matches!(cli.command, Commands::Config(_)));
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["learnlog", "list", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.explicit_output(), Some("json"));
    }

    #[test]
    fn format_flag_wins_over_json() {
        let cli = Cli::parse_from(["learnlog", "--format", "text", "--json", "list"]);
        assert_eq!(cli.explicit_output(), Some("text"));
    }

    #[test]
    fn no_output_flags_means_no_explicit_mode() {
        let cli = Cli::parse_from(["learnlog", "list"]);
        assert!(cli.explicit_output().is_none());
    }

    #[test]
    fn config_show_project_conflicts_with_user() {
        let result = Cli::try_parse_from(["learnlog", "config", "show", "--project", "--user"]);
        assert!(result.is_err());
    }
}
