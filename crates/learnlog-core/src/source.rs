//! Reading interaction logs from JSON or JSON Lines text.
//!
//! A document whose first non-whitespace character is `[` is parsed as a
//! JSON array. Anything else is JSON Lines: one record per line, with blank
//! lines and `#` comment lines skipped.

use std::path::Path;

use tracing::debug;

use crate::error::LearnlogError;
use crate::model::interaction::InteractionLog;

/// Parse interaction records from a JSON array or JSON Lines document.
///
/// # Errors
///
/// Returns [`LearnlogError::ParseDocument`] for a malformed JSON array and
/// [`LearnlogError::ParseLine`] (with a 1-based line number) for a malformed
/// JSON Lines record.
pub fn parse_interactions(text: &str) -> Result<Vec<InteractionLog>, LearnlogError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|source| LearnlogError::ParseDocument { source });
    }

    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            Some(
                serde_json::from_str::<InteractionLog>(line)
                    .map_err(|source| LearnlogError::ParseLine {
                        line: idx + 1,
                        source,
                    }),
            )
        })
        .collect()
}

/// Read and parse an interaction log file.
///
/// # Errors
///
/// Returns [`LearnlogError::Io`] if the file cannot be read, or a parse
/// error from [`parse_interactions`].
pub fn load_interactions(path: &Path) -> Result<Vec<InteractionLog>, LearnlogError> {
    let text = std::fs::read_to_string(path).map_err(|source| LearnlogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_interactions(&text)?;
    debug!(
        path = %path.display(),
        count = records.len(),
        "loaded interaction log"
    );
    Ok(records)
}
