use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The best score so far, optionally kept in a JSON file.
pub struct HighScore {
    path: Option<PathBuf>,
    best: usize,
}

#[derive(Serialize, Deserialize)]
struct HighScoreFile {
    high_score: usize,
}

impl HighScore {
    /// A high score that is forgotten when the program exits.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            best: 0,
        }
    }

    /// Reads the high score from `path`, or starts at zero if the file does not exist yet.
    pub fn load(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !dir.is_dir() {
                anyhow::bail!("Directory '{}' does not exist", dir.display());
            }
        }
        let best = if path.exists() {
            let file: HighScoreFile = serde_json::from_reader(BufReader::new(File::open(&path)?))?;
            file.high_score
        } else {
            0
        };
        Ok(Self {
            path: Some(path),
            best,
        })
    }

    pub fn best(&self) -> usize {
        self.best
    }

    /// Stores `score` if it beats the high score. Returns whether it did.
    ///
    /// If the file cannot be written, the high score stays as it was.
    pub fn record(&mut self, score: usize) -> anyhow::Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        if let Some(path) = &self.path {
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, &HighScoreFile { high_score: score })?;
            writer.flush()?;
        }
        self.best = score;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persists_only_improvements() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.json");

        let mut high_score = HighScore::load(path.clone()).unwrap();
        assert_eq!(high_score.best(), 0);
        assert!(high_score.record(12).unwrap());
        assert!(!high_score.record(7).unwrap());
        assert!(!high_score.record(12).unwrap());

        let reloaded = HighScore::load(path.clone()).unwrap();
        assert_eq!(reloaded.best(), 12);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"high_score":12}"#
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("high_score.json");
        assert!(HighScore::load(path).is_err());
    }

    #[test]
    fn failed_write_keeps_old_best() {
        let dir = tempfile::tempdir().unwrap();
        let sub_dir = dir.path().join("scores");
        std::fs::create_dir(&sub_dir).unwrap();
        let mut high_score = HighScore::load(sub_dir.join("high_score.json")).unwrap();
        std::fs::remove_dir(&sub_dir).unwrap();

        assert!(high_score.record(5).is_err());
        assert_eq!(high_score.best(), 0);
    }

    #[test]
    fn in_memory_keeps_best() {
        let mut high_score = HighScore::in_memory();
        assert!(high_score.record(3).unwrap());
        assert_eq!(high_score.best(), 3);
    }
}
