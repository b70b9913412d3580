//! `learnlog list` — list interactions, optionally scoped to one item.

use crate::output::{self, OutputMode, Renderable};
use anyhow::Result;
use clap::Args;
use learnlog_core::config::ProjectConfig;
use learnlog_core::source::load_interactions;
use learnlog_core::{InteractionFilter, InteractionLog, LearnlogError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Interaction log file (JSON array or JSON Lines).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Show only interactions with this item ID.
    #[arg(long, allow_negative_numbers = true)]
    pub item_id: Option<i64>,

    /// Maximum interactions to show.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl Renderable for InteractionLog {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        output::pretty_section(w, &format!("Interaction #{}", self.id))?;
        output::pretty_kv(w, "Learner", self.learner_id.to_string())?;
        output::pretty_kv(w, "Item", self.item_id.to_string())?;
        output::pretty_kv(w, "Kind", &self.kind)?;
        writeln!(w)
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *w, self)?;
        writeln!(w)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{}  {}  {}  {}",
            self.id, self.learner_id, self.item_id, self.kind
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["id", "learner", "item", "kind"]
    }
}

/// Pick the log file: `--file` wins, then `input.path` from project config.
fn resolve_input(
    args: &ListArgs,
    project: &ProjectConfig,
    project_root: &Path,
) -> Result<PathBuf, LearnlogError> {
    args.file
        .clone()
        .or_else(|| project.input_path(project_root))
        .ok_or(LearnlogError::NoInput)
}

pub fn run_list(
    args: &ListArgs,
    output: OutputMode,
    project: &ProjectConfig,
    project_root: &Path,
) -> Result<()> {
    let path = resolve_input(args, project, project_root)?;
    let records = load_interactions(&path)?;
    let total = records.len();

    let mut matched = InteractionFilter::for_item(args.item_id).apply(records);
    if let Some(limit) = args.limit.or(project.list.limit) {
        matched.truncate(limit);
    }

    info!(
        path = %path.display(),
        item_id = ?args.item_id,
        total,
        shown = matched.len(),
        "listed interactions"
    );

    if matched.is_empty() && !output.is_json() {
        return output::render_message(output, "No interactions found");
    }

    output::render_list(&matched, output)?;
    Ok(())
}
