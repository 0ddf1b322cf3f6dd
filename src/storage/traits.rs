//! Abstract storage trait for the roster.
//!
//! Backends persist the whole roster as a unit: every save rewrites
//! everything, every load reads everything. There is no partial update.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::student::StudentRecord;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file does not exist yet.
    #[error("No data file at {}", path.display())]
    NotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// Reading or writing the backing file failed.
    #[error("{source}")]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Backend error.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Wraps an I/O error, turning `NotFound` into [`StorageError::NotFound`].
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Returns true if the store simply has no data yet.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Records read back from a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    /// Parsed records, in file order.
    pub records: Vec<StudentRecord>,
    /// Lines dropped because they had no comma.
    pub skipped: usize,
}

/// Persistence backend for the roster.
pub trait RecordStore {
    /// Replaces the stored contents with `records`, in order.
    fn save(&self, records: &[StudentRecord]) -> Result<(), StorageError>;

    /// Reads every stored record.
    ///
    /// # Errors
    /// - `NotFound`: nothing has been saved yet
    /// - `Io` / `Backend`: the data could not be read
    fn load(&self) -> Result<Loaded, StorageError>;

    /// Human-readable location, used in log output.
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test: ensure the trait is object-safe
    fn _assert_record_store_object_safe(_: &dyn RecordStore) {}

    #[test]
    fn test_from_io_maps_not_found() {
        let err = StorageError::from_io(
            "students.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_not_found());
        assert!(err.to_string().contains("students.txt"));
    }

    #[test]
    fn test_io_error_display_is_reason_only() {
        let err = StorageError::from_io(
            "students.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "permission denied");
    }
}
