//! File-backed high-score slot.

use std::fs;
use std::io;
use std::path::PathBuf;

use duemila_core::{Score, ScoreSlot};

/// Persists the high score as decimal ASCII in a single file.
///
/// A missing or corrupt file reads as 0 and writes are best-effort, so the
/// session never sees a persistence error.
#[derive(Clone, Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreSlot for FileSlot {
    fn load(&mut self) -> Score {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return 0,
            Err(err) => {
                log::warn!("could not read {}: {}", self.path.display(), err);
                return 0;
            }
        };

        // only the first line counts, trailing content is ignored
        let first_line = contents.lines().next().unwrap_or("");
        match first_line.trim().parse() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("corrupt high score in {}: {}", self.path.display(), err);
                0
            }
        }
    }

    fn store(&mut self, value: Score) {
        if let Err(err) = fs::write(&self.path, format!("{value}\n")) {
            log::error!("could not write {}: {}", self.path.display(), err);
        }
    }
}
