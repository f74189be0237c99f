//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CraftError, CraftResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CraftResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CraftError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate(&config, path)?;

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

fn validate(config: &Config, path: &Path) -> CraftResult<()> {
    if config.browse.count == 0 {
        return Err(CraftError::Config {
            file: path.to_path_buf(),
            message: "browse.count must be a positive integer".to_string(),
        });
    }
    Ok(())
}

/// Load from an explicit path, the working directory, the user config, or defaults.
///
/// An explicit path that cannot be read is an error; implicit locations
/// are skipped when missing.
pub fn load_or_default(explicit: Option<&Path>) -> CraftResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let local = PathBuf::from("craftree.toml");
    if local.exists() {
        let (config, warnings) = load_with_warnings(&local)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("craftree/config.toml");
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (CRAFTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

fn apply_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = get_env("CRAFTREE_DATA_DIR") {
        config.data.dir = PathBuf::from(dir);
    }

    if let Some(plans) = get_env("CRAFTREE_PLANS") {
        config.data.plans = Some(PathBuf::from(plans));
    }

    if let Some(val) = get_env("CRAFTREE_UNICODE") {
        config.ui.unicode = val.to_lowercase() != "false" && val != "0";
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
    const CANDIDATES: &[&str] = &[
        "data", "dir", "plans", "browse", "goal", "count", "units", "size", "name", "plural",
        "ui", "unicode", "indent", "log", "file",
    ];

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

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
