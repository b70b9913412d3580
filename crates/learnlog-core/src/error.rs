use std::fmt;
use std::path::PathBuf;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InputReadFailed,
    MalformedRecord,
    NoInput,
    ConfigParseError,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InputReadFailed => "E1001",
            Self::MalformedRecord => "E1002",
            Self::NoInput => "E1003",
            Self::ConfigParseError => "E2001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InputReadFailed => "Interaction log could not be read",
            Self::MalformedRecord => "Malformed interaction record",
            Self::NoInput => "No interaction log given",
            Self::ConfigParseError => "Config file parse error",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InputReadFailed => Some("Check that the file exists and is readable."),
            Self::MalformedRecord => Some(
                "Each record needs integer `id`, `learner_id`, and `item_id` fields.",
            ),
            Self::NoInput => {
                Some("Pass `--file <PATH>` or set `input.path` in .learnlog/config.toml.")
            }
            Self::ConfigParseError => Some(
                "Fix syntax in .learnlog/config.toml or <config_dir>/learnlog/config.toml and retry.",
            ),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while loading interaction logs.
#[derive(Debug, thiserror::Error)]
pub enum LearnlogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed interaction log: {source}")]
    ParseDocument { source: serde_json::Error },

    #[error("malformed interaction record on line {line}: {source}")]
    ParseLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("no interaction log given")]
    NoInput,
}

impl LearnlogError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::InputReadFailed,
            Self::ParseDocument { .. } | Self::ParseLine { .. } => ErrorCode::MalformedRecord,
            Self::NoInput => ErrorCode::NoInput,
        }
    }

    /// Remediation text for this error, falling back to the code summary.
    #[must_use]
    pub fn suggestion(&self) -> String {
        let code = self.error_code();
        code.hint().unwrap_or_else(|| code.message()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, LearnlogError};
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::InputReadFailed,
            ErrorCode::MalformedRecord,
            ErrorCode::NoInput,
            ErrorCode::ConfigParseError,
            ErrorCode::InternalUnexpected,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::MalformedRecord.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn parse_line_error_mentions_line_number() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LearnlogError::ParseLine { line: 4, source };
        assert!(err.to_string().contains("line 4"));
        assert_eq!(err.error_code(), ErrorCode::MalformedRecord);
    }

    #[test]
    fn config_hint_names_project_and_user_files() {
        let hint = ErrorCode::ConfigParseError.hint().unwrap();
        assert!(hint.contains(".learnlog/config.toml"));
        assert!(hint.contains("<config_dir>/learnlog/config.toml"));
    }

    #[test]
    fn no_input_suggests_file_flag() {
        let err = LearnlogError::NoInput;
        assert_eq!(err.error_code().code(), "E1003");
        assert!(err.suggestion().contains("--file"));
    }
}
