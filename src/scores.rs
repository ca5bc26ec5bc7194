//! Per-difficulty best scores and the JSON file they persist to.
//!
//! The file maps each difficulty name to the fewest attempts used to win,
//! or `"N/A"` when no game has been won yet:
//!
//! ```text
//! {"Easy": "N/A", "Medium": "3", "Hard": "N/A"}
//! ```
//!
//! Records are written as strings; bare integers and `null` are also
//! accepted on load.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::difficulty::Difficulty;

const NO_RECORD: &str = "N/A";

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("score file is not a JSON object")]
    NotAnObject,

    #[error("invalid record for {difficulty}: {value}")]
    InvalidRecord { difficulty: Difficulty, value: String },
}

/// Best attempt count per difficulty. A missing entry means no record yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    records: BTreeMap<Difficulty, u32>,
}

impl HighScoreTable {
    pub fn best(&self, difficulty: Difficulty) -> Option<u32> {
        self.records.get(&difficulty).copied()
    }

    /// Stores `attempts` if it beats the current record. Returns whether it did.
    pub fn record(&mut self, difficulty: Difficulty, attempts: u32) -> bool {
        match self.best(difficulty) {
            Some(best) if attempts >= best => false,
            _ => {
                self.records.insert(difficulty, attempts);
                true
            }
        }
    }

    /// Display text for one difficulty's record.
    pub fn display(&self, difficulty: Difficulty) -> String {
        self.best(difficulty)
            .map(|n| n.to_string())
            .unwrap_or_else(|| NO_RECORD.to_string())
    }

    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        let Value::Object(map) = serde_json::from_str::<Value>(json)? else {
            return Err(ScoreError::NotAnObject);
        };

        let mut table = Self::default();

        for (key, value) in map {
            let Ok(difficulty) = key.parse::<Difficulty>() else {
                tracing::debug!("Ignoring unknown score key: {}", key);
                continue;
            };

            if let Some(attempts) = parse_record(difficulty, &value)? {
                table.records.insert(difficulty, attempts);
            }
        }

        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, ScoreError> {
        let map: Map<String, Value> = Difficulty::ALL
            .into_iter()
            .map(|d| (d.name().to_string(), Value::String(self.display(d))))
            .collect();

        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }
}

fn parse_record(difficulty: Difficulty, value: &Value) -> Result<Option<u32>, ScoreError> {
    let invalid = || ScoreError::InvalidRecord {
        difficulty,
        value: value.to_string(),
    };

    let attempts = match value {
        Value::Null => return Ok(None),
        Value::String(s) if s == NO_RECORD => return Ok(None),
        Value::String(s) => s.trim().parse::<u32>().map_err(|_| invalid())?,
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid)?,
        _ => return Err(invalid()),
    };

    if attempts == 0 {
        return Err(invalid());
    }

    Ok(Some(attempts))
}

/// Result of reporting a won game to the [`Scoreboard`].
#[derive(Debug)]
pub enum RecordWin {
    Unchanged,
    Improved,
    /// The record improved in memory but the file could not be written.
    ImprovedUnsaved(ScoreError),
}

impl RecordWin {
    pub fn improved(&self) -> bool {
        !matches!(self, RecordWin::Unchanged)
    }
}

/// A [`HighScoreTable`] bound to the file it was loaded from.
#[derive(Debug)]
pub struct Scoreboard {
    path: PathBuf,
    table: HighScoreTable,
}

impl Scoreboard {
    /// Loads the table at `path`.
    ///
    /// A missing file is a first run and yields the empty table. An
    /// unreadable or malformed file is logged and also yields the empty
    /// table; it is overwritten on the next improving win.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let table = match fs::read_to_string(&path) {
            Ok(text) => HighScoreTable::from_json(&text).unwrap_or_else(|e| {
                warn!("Ignoring corrupt score file {}: {}", path.display(), e);
                HighScoreTable::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No score file at {}, starting fresh", path.display());
                HighScoreTable::default()
            }
            Err(e) => {
                warn!("Failed to read score file {}: {}", path.display(), e);
                HighScoreTable::default()
            }
        };

        Self { path, table }
    }

    pub fn table(&self) -> &HighScoreTable {
        &self.table
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records a win and writes the file if the record improved.
    pub fn record_win(&mut self, difficulty: Difficulty, attempts: u32) -> RecordWin {
        if !self.table.record(difficulty, attempts) {
            return RecordWin::Unchanged;
        }

        info!("New record for {}: {} attempts", difficulty, attempts);

        match self.save() {
            Ok(()) => RecordWin::Improved,
            Err(e) => {
                warn!("Failed to save scores to {}: {}", self.path.display(), e);
                RecordWin::ImprovedUnsaved(e)
            }
        }
    }

    pub fn save(&self) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, self.table.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let board = Scoreboard::load(dir.path().join("high_scores.json"));

        for d in Difficulty::ALL {
            assert_eq!(board.table().best(d), None);
            assert_eq!(board.table().display(d), "N/A");
        }
    }

    #[test]
    fn test_loads_string_records() {
        let table =
            HighScoreTable::from_json(r#"{"Easy": "N/A", "Medium": "3", "Hard": "N/A"}"#).unwrap();

        assert_eq!(table.best(Difficulty::Easy), None);
        assert_eq!(table.best(Difficulty::Medium), Some(3));
        assert_eq!(table.best(Difficulty::Hard), None);
    }

    #[test]
    fn test_loads_integer_records_and_missing_keys() {
        let table = HighScoreTable::from_json(r#"{"Hard": 2, "Easy": null}"#).unwrap();

        assert_eq!(table.best(Difficulty::Easy), None);
        assert_eq!(table.best(Difficulty::Medium), None);
        assert_eq!(table.best(Difficulty::Hard), Some(2));
    }

    #[test]
    fn test_rejects_bad_records() {
        for json in [
            r#"{"Medium": "three"}"#,
            r#"{"Medium": 0}"#,
            r#"{"Medium": -4}"#,
            r#"{"Medium": [3]}"#,
            r#"["Medium"]"#,
            "not json",
        ] {
            assert!(HighScoreTable::from_json(json).is_err(), "accepted {}", json);
        }
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_scores.json");
        fs::write(&path, "{\"Medium\": \"oops\"").unwrap();

        let board = Scoreboard::load(&path);
        assert_eq!(board.table(), &HighScoreTable::default());
    }

    #[test]
    fn test_record_only_keeps_strictly_better() {
        let mut table = HighScoreTable::default();

        assert!(table.record(Difficulty::Easy, 6));
        assert!(!table.record(Difficulty::Easy, 6));
        assert!(!table.record(Difficulty::Easy, 9));
        assert!(table.record(Difficulty::Easy, 4));
        assert_eq!(table.best(Difficulty::Easy), Some(4));
        assert_eq!(table.best(Difficulty::Hard), None);
    }

    #[test]
    fn test_first_win_then_worse_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_scores.json");
        let mut board = Scoreboard::load(&path);

        let first = board.record_win(Difficulty::Medium, 3);
        assert!(matches!(first, RecordWin::Improved));
        assert_eq!(board.table().best(Difficulty::Medium), Some(3));

        let written = fs::read_to_string(&path).unwrap();
        let on_disk = HighScoreTable::from_json(&written).unwrap();
        assert_eq!(on_disk.best(Difficulty::Medium), Some(3));

        let second = board.record_win(Difficulty::Medium, 5);
        assert!(!second.improved());
        assert_eq!(board.table().best(Difficulty::Medium), Some(3));
        assert_eq!(fs::read_to_string(&path).unwrap(), written);
    }

    #[test]
    fn test_non_improving_win_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_scores.json");
        fs::write(&path, r#"{"Easy": "2"}"#).unwrap();

        let mut board = Scoreboard::load(&path);
        assert!(!board.record_win(Difficulty::Easy, 2).improved());
        assert!(!board.record_win(Difficulty::Easy, 8).improved());

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"Easy": "2"}"#);
    }

    #[test]
    fn test_save_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("high_scores.json");

        let mut board = Scoreboard::load(&path);
        board.record_win(Difficulty::Hard, 4);
        board.record_win(Difficulty::Easy, 7);

        let reloaded = Scoreboard::load(&path);
        assert_eq!(reloaded.table(), board.table());

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["Medium"], "N/A");
        assert_eq!(json["Hard"], "4");
    }

    #[test]
    fn test_write_failure_keeps_record_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("high_scores.json");
        fs::create_dir(&path).unwrap();

        let mut board = Scoreboard::load(&path);
        let result = board.record_win(Difficulty::Medium, 3);

        assert!(matches!(result, RecordWin::ImprovedUnsaved(_)));
        assert!(result.improved());
        assert_eq!(board.table().best(Difficulty::Medium), Some(3));
    }
}
