//! Local persistence for the selection set.
//!
//! The saved list lives in a small JSON document under the user's data
//! directory. The whole set is rewritten after every mutation; last
//! successful write wins. A missing file is an empty list, not an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::models::Entry;

const STORE_FILE: &str = "unbored.json";

/// Handle to the save file.
pub struct Store {
    dir: PathBuf,
    path: PathBuf,
}

impl Store {
    /// Open the store, creating the data directory if needed.
    ///
    /// With no override this is `<user data dir>/unbored/unbored.json`.
    /// Failure here is the one fatal storage condition: the process cannot
    /// meaningfully run without somewhere to save.
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self, Error> {
        let dir = match data_dir {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or_else(|| Error::Storage("no user data directory available".to_string()))?
                .join("unbored"),
        };
        fs::create_dir_all(&dir)?;
        let path = dir.join(STORE_FILE);
        Ok(Self { dir, path })
    }

    /// The directory holding the save file (also used for the log file).
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the selection set. A missing file yields an empty set.
    pub fn load(&self) -> Result<Vec<Entry>, Error> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no save file yet, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(|e| Error::Storage(e.to_string()))?;
        debug!(count = entries.len(), "loaded selection set");
        Ok(entries)
    }

    /// Write the full selection set back to disk.
    pub fn save(&self, entries: &[Entry]) -> Result<(), Error> {
        let content =
            serde_json::to_string_pretty(entries).map_err(|e| Error::Storage(e.to_string()))?;
        fs::write(&self.path, content)?;
        debug!(count = entries.len(), "saved selection set");
        Ok(())
    }
}
