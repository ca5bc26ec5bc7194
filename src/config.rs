//! Startup configuration read from environment variables.
use std::{env, path::PathBuf, str::FromStr};

use crate::difficulty::Difficulty;

const APP_DIR: &str = "number-guesser";
const SCORES_FILE: &str = "high_scores.json";

/// Application configuration.
///
/// Environment variables:
/// - `NUMBER_GUESSER_SCORES` - path of the high-score file
/// - `NUMBER_GUESSER_LOG_DIR` - directory for the log file (default: `logs`)
/// - `NUMBER_GUESSER_DIFFICULTY` - difficulty of the first game (default: Medium)
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub scores_path: PathBuf,
    pub log_dir: PathBuf,
    pub difficulty: Difficulty,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scores_path: default_scores_path(),
            log_dir: PathBuf::from("logs"),
            difficulty: Difficulty::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = read_var::<PathBuf>(&lookup, "NUMBER_GUESSER_SCORES") {
            config.scores_path = path;
        }

        if let Some(dir) = read_var::<PathBuf>(&lookup, "NUMBER_GUESSER_LOG_DIR") {
            config.log_dir = dir;
        }

        if let Some(difficulty) = read_var::<Difficulty>(&lookup, "NUMBER_GUESSER_DIFFICULTY") {
            config.difficulty = difficulty;
        }

        config
    }
}

/// Platform data directory, or the working directory when there is none.
fn default_scores_path() -> PathBuf {
    match dirs::data_dir() {
        Some(mut path) => {
            path.push(APP_DIR);
            path.push(SCORES_FILE);
            path
        }
        None => PathBuf::from(SCORES_FILE),
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    let value = lookup(key)?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.scores_path.ends_with(SCORES_FILE));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("NUMBER_GUESSER_SCORES", "/tmp/scores.json"),
            ("NUMBER_GUESSER_LOG_DIR", "/tmp/guesser-logs"),
            ("NUMBER_GUESSER_DIFFICULTY", "hard"),
        ]);

        assert_eq!(config.scores_path, PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/guesser-logs"));
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[
            ("NUMBER_GUESSER_DIFFICULTY", "impossible"),
            ("NUMBER_GUESSER_SCORES", "  "),
        ]);

        assert_eq!(config.difficulty, Difficulty::Medium);
        assert!(config.scores_path.ends_with(SCORES_FILE));
    }
}
