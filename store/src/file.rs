use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::port::{PortError, StatePort};

/// File-backed port: one `<key>.json` document per key under a data
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PortError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StatePort for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, raw: &str) -> Result<(), PortError> {
        // Write to a sibling temp file and rename so a crash mid-write
        // never leaves a truncated document behind.
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, self.path(key))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PortError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
