//! Flat-file storage backend.
//!
//! Saves go through a temporary sibling file that is flushed, optionally
//! fsync'd, and then renamed over the target, so a crash mid-save leaves the
//! previous file intact.
//!
//! If the data file is a symlink, the link is followed and its target is
//! replaced, so the link survives. The existing file's permissions are copied
//! onto the replacement.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Result as IoResult, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::student::StudentRecord;

use super::codec;
use super::traits::{Loaded, RecordStore, StorageError};

/// Roster stored as `id,name` lines in a single text file.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
    sync_on_write: bool,
}

impl FlatFileStore {
    /// Creates a store for `path`. The file is not touched until the first
    /// load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sync_on_write: true,
        }
    }

    /// Sets whether each save is fsync'd before the rename.
    #[must_use]
    pub fn with_sync_on_write(mut self, sync_on_write: bool) -> Self {
        self.sync_on_write = sync_on_write;
        self
    }

    /// File the save actually replaces: the symlink target if the data file
    /// is a link, the data file itself otherwise.
    fn save_target(&self) -> PathBuf {
        let is_link = fs::symlink_metadata(&self.path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        if is_link {
            // A dangling link has nothing to resolve; write through its path.
            if let Ok(resolved) = fs::canonicalize(&self.path) {
                return resolved;
            }
        }
        self.path.clone()
    }

    fn temp_path(target: &Path) -> PathBuf {
        let mut name = target
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".tmp.{}", Uuid::new_v4()));
        target.with_file_name(name)
    }

    fn write_temp(
        &self,
        temp_path: &Path,
        target: &Path,
        records: &[StudentRecord],
    ) -> IoResult<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;

        let mut writer = BufWriter::new(file);
        codec::write_records(&mut writer, records)?;
        writer.flush()?;

        if let Ok(existing) = fs::metadata(target) {
            fs::set_permissions(temp_path, existing.permissions())?;
        }

        if self.sync_on_write {
            writer.get_ref().sync_all()?;
        }
        Ok(())
    }
}

impl RecordStore for FlatFileStore {
    fn save(&self, records: &[StudentRecord]) -> Result<(), StorageError> {
        let target = self.save_target();
        let temp_path = Self::temp_path(&target);

        let written = self
            .write_temp(&temp_path, &target, records)
            .and_then(|()| fs::rename(&temp_path, &target));

        if let Err(e) = written {
            if temp_path.exists() {
                if let Err(cleanup) = fs::remove_file(&temp_path) {
                    warn!(path = %temp_path.display(), error = %cleanup, "failed to remove temp file");
                }
            }
            return Err(StorageError::Io {
                path: self.path.clone(),
                source: e,
            });
        }

        debug!(path = %self.path.display(), records = records.len(), "roster saved");
        Ok(())
    }

    fn load(&self) -> Result<Loaded, StorageError> {
        let file = File::open(&self.path).map_err(|e| StorageError::from_io(&self.path, e))?;

        let loaded = codec::read_records(BufReader::new(file)).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        if loaded.skipped > 0 {
            debug!(path = %self.path.display(), skipped = loaded.skipped, "skipped malformed lines");
        }
        Ok(loaded)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
