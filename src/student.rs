//! Student record type.
//!
//! A record is a plain `(id, name)` pair. The id acts as the lookup key but
//! uniqueness is never enforced: the roster happily holds duplicates.

use std::fmt;

/// A single student entry in the roster.
///
/// # Examples
///
/// ```
/// use roster::StudentRecord;
///
/// let record = StudentRecord::new("S1", "Alice");
/// assert_eq!(record.to_string(), "ID: S1, Name: Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentRecord {
    /// Lookup key. Not validated; may be empty or repeated.
    pub id: String,

    /// Display name. May contain commas.
    pub name: String,
}

impl StudentRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns true if this record has the given id (exact, case-sensitive).
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }

    /// Replaces the name, keeping the id.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let record = StudentRecord::new("S42", "Grace Hopper");
        assert_eq!(format!("{record}"), "ID: S42, Name: Grace Hopper");
    }

    #[test]
    fn test_has_id_is_case_sensitive() {
        let record = StudentRecord::new("s1", "Alice");
        assert!(record.has_id("s1"));
        assert!(!record.has_id("S1"));
    }

    #[test]
    fn test_rename_keeps_id() {
        let mut record = StudentRecord::new("S1", "Alice");
        record.rename("Bob");
        assert_eq!(record.id, "S1");
        assert_eq!(record.name, "Bob");
    }
}
