use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Project config, read from `<root>/.learnlog/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Default interaction log file. Relative paths resolve against the
    /// project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Default maximum number of records shown by `learnlog list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl ProjectConfig {
    /// The configured input file, resolved against `project_root`.
    #[must_use]
    pub fn input_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.input.path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                project_root.join(path)
            }
        })
    }
}

/// User config, read from `<config_dir>/learnlog/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub project: ProjectConfig,
    pub user: UserConfig,
    pub resolved_output: String,
}

#[must_use]
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".learnlog/config.toml")
}

#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("learnlog/config.toml"))
}

/// Load the project config, falling back to defaults when the file is absent.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    load_toml_or_default(&project_config_path(project_root))
}

/// Load the user config, falling back to defaults when the file is absent.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(path) = user_config_path() else {
        return Ok(UserConfig::default());
    };
    load_toml_or_default(&path)
}

fn load_toml_or_default<T>(path: &Path) -> Result<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<T>(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load both config layers and resolve the output mode.
///
/// `explicit_output` is an output mode chosen on the command line, if any.
///
/// # Errors
///
/// Fails if either config file exists but is malformed.
pub fn resolve_config(
    project_root: &Path,
    explicit_output: Option<&str>,
) -> Result<EffectiveConfig> {
    let project = load_project_config(project_root)?;
    let user = load_user_config()?;

    let env_format = env::var("FORMAT").ok();
    let resolved_output = resolve_output(
        explicit_output,
        env_format.as_deref(),
        user.output.as_deref(),
        std::io::stdout().is_terminal(),
    )
    .to_string();

    Ok(EffectiveConfig {
        project,
        user,
        resolved_output,
    })
}

/// Map a raw output-mode string onto `pretty`, `text`, or `json`.
#[must_use]
pub fn normalize_output_mode(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        // `human` and `table` are legacy aliases
        "pretty" | "human" => Some("pretty"),
        "text" | "table" => Some("text"),
        "json" => Some("json"),
        _ => None,
    }
}

/// Resolve the output mode.
///
/// Precedence: explicit flag, `FORMAT` env var, user config, then pretty on a
/// TTY and text when piped. Unknown values fall through to the next layer.
#[must_use]
pub fn resolve_output(
    explicit: Option<&str>,
    env_format: Option<&str>,
    user_output: Option<&str>,
    is_tty: bool,
) -> &'static str {
    [explicit, env_format, user_output]
        .into_iter()
        .flatten()
        .find_map(normalize_output_mode)
        .unwrap_or(if is_tty { "pretty" } else { "text" })
}
