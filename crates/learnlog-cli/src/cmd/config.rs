use anyhow::Result;
use clap::{Args, Subcommand};
use learnlog_core::config::{EffectiveConfig, ProjectConfig, UserConfig};
use serde::Serialize;
use std::io::{self, Write};

use crate::output::{self, OutputMode};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Show resolved or raw configuration
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Show project config only
    #[arg(long, conflicts_with = "user")]
    project: bool,

    /// Show user config only
    #[arg(long)]
    user: bool,
}

/// Effective configuration as printed by `config show`.
///
/// Scalar fields come before tables so the TOML rendering stays valid.
#[derive(Debug, Serialize)]
struct ConfigView<'a> {
    output: &'a str,
    project: &'a ProjectConfig,
    user: &'a UserConfig,
}

pub fn run_config(args: &ConfigArgs, effective: &EffectiveConfig, output: OutputMode) -> Result<()> {
    match &args.command {
        ConfigCommand::Show(show) => run_show(show, effective, output),
    }
}

fn run_show(args: &ShowArgs, effective: &EffectiveConfig, output: OutputMode) -> Result<()> {
    if args.project {
        return output::render(output, &effective.project, write_toml);
    }

    if args.user {
        return output::render(output, &effective.user, write_toml);
    }

    let view = ConfigView {
        output: &effective.resolved_output,
        project: &effective.project,
        user: &effective.user,
    };
    output::render(output, &view, write_toml)
}

fn write_toml<T: Serialize>(value: &T, w: &mut dyn Write) -> io::Result<()> {
    let rendered = toml::to_string_pretty(value).map_err(io::Error::other)?;
    write!(w, "{rendered}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnlog_core::config::{InputConfig, ListConfig};
    use std::path::PathBuf;

    #[test]
    fn config_view_renders_as_toml() {
        let project = ProjectConfig {
            input: InputConfig {
                path: Some(PathBuf::from("logs.jsonl")),
            },
            list: ListConfig { limit: Some(10) },
        };
        let user = UserConfig::default();
        let view = ConfigView {
            output: "text",
            project: &project,
            user: &user,
        };

        let mut buf = Vec::new();
        write_toml(&view, &mut buf).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.starts_with("output = \"text\""));
        assert!(rendered.contains("path = \"logs.jsonl\""));
        assert!(rendered.contains("limit = 10"));
    }
}
