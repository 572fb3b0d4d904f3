//! Profile stores. `load` and `save` never fail: errors are logged and the
//! caller keeps running on defaults or in memory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ProfileError;
use crate::record::ProfileRecord;

/// Boundary to whatever persists the profile.
pub trait ProfileStore {
    /// Load the stored record merged over defaults, or defaults on any failure.
    fn load(&mut self) -> ProfileRecord;
    fn save(&mut self, record: &ProfileRecord);
}

/// Pretty-printed JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `profile.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("profile.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn read_record(path: &Path) -> Result<ProfileRecord, ProfileError> {
    let json = fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(ProfileError::Parse)
}

pub fn write_record(path: &Path, record: &ProfileRecord) -> Result<(), ProfileError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| ProfileError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(record).map_err(ProfileError::Serialize)?;
    fs::write(path, json).map_err(|source| ProfileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

impl ProfileStore for JsonFileStore {
    fn load(&mut self) -> ProfileRecord {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no profile yet, using defaults");
            return ProfileRecord::default();
        }
        match read_record(&self.path) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "profile unreadable, using defaults");
                ProfileRecord::default()
            }
        }
    }

    fn save(&mut self, record: &ProfileRecord) {
        if let Err(e) = write_record(&self.path, record) {
            warn!(error = %e, "profile not saved");
        }
    }
}

/// In-memory store for tests and storage-less environments.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<ProfileRecord>,
    saves: usize,
}

impl MemoryStore {
    pub fn with_record(record: ProfileRecord) -> Self {
        Self {
            record: Some(record),
            saves: 0,
        }
    }

    /// Number of `save` calls observed.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored(&self) -> Option<&ProfileRecord> {
        self.record.as_ref()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&mut self) -> ProfileRecord {
        self.record.clone().unwrap_or_default()
    }

    fn save(&mut self, record: &ProfileRecord) {
        self.record = Some(record.clone());
        self.saves += 1;
    }
}
