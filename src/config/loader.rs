//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LabError, LabResult};

use super::types::{Config, OutputFormat, Verbosity};

/// File name of the project config, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "circle-lab.toml";

const ENV_RADIUS: &str = "CIRCLE_LAB_RADIUS";
const ENV_VERBOSITY: &str = "CIRCLE_LAB_VERBOSITY";
const ENV_FORMAT: &str = "CIRCLE_LAB_FORMAT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A config file that exists but could not be used
#[derive(Debug)]
pub struct SkippedConfig {
    pub file: PathBuf,
    pub error: LabError,
}

/// Result of the layered lookup done by [`load_or_default`]
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Files tried before `source` that failed to load
    pub skipped: Vec<SkippedConfig>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LabResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LabError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => LabError::Io(e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LabError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// A file that fails to load is recorded in `skipped` and the next layer
/// is tried.
pub fn load_or_default(project_root: Option<&Path>) -> LoadedConfig {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config) = user_config_path() {
        candidates.push(user_config);
    }

    let mut skipped = Vec::new();
    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                return LoadedConfig {
                    config: with_env_overrides(config),
                    source: Some(candidate),
                    warnings,
                    skipped,
                };
            }
            Err(error) => skipped.push(SkippedConfig {
                file: candidate,
                error,
            }),
        }
    }

    LoadedConfig {
        config: with_env_overrides(Config::default()),
        source: None,
        warnings: Vec::new(),
        skipped,
    }
}

/// `$XDG_CONFIG_HOME/circle-lab/config.toml`, or the platform config dir
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("circle-lab").join("config.toml"))
}

/// Apply environment variable overrides (CIRCLE_LAB_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides using a custom variable lookup.
///
/// Unparseable values are ignored and the existing setting is kept.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(radius) = lookup(ENV_RADIUS) {
        if let Ok(parsed) = radius.trim().parse::<f64>() {
            config.container.radius = parsed;
        }
    }

    if let Some(verbosity) = lookup(ENV_VERBOSITY).as_deref().and_then(Verbosity::parse) {
        config.output.verbosity = verbosity;
    }

    if let Some(format) = lookup(ENV_FORMAT).as_deref().and_then(OutputFormat::parse) {
        config.output.format = format;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["container", "radius", "output", "verbosity", "format"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
