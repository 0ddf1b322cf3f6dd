//! In-memory record store.
//!
//! `Roster` is the ordered collection every role operates on. Insertion order
//! is preserved and all lookups are linear scans. Persistence lives in
//! [`crate::storage`]; the roster itself never touches the disk.

use crate::student::StudentRecord;

/// Result of an [`Roster::edit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The first record with the id was renamed.
    Updated,
    /// No record has the id; nothing changed.
    NotFound,
}

/// Ordered, in-memory list of student records.
///
/// Duplicate ids are allowed. `edit` touches only the first match while
/// `delete` removes every match.
///
/// # Examples
///
/// ```
/// use roster::{EditOutcome, Roster};
///
/// let mut roster = Roster::new();
/// roster.add("S1", "Alice");
/// assert_eq!(roster.edit("S1", "Bob"), EditOutcome::Updated);
/// assert_eq!(roster.records()[0].name, "Bob");
/// assert_eq!(roster.delete("S1"), 1);
/// assert!(roster.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster from already-loaded records, keeping their order.
    #[must_use]
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Appends a record. Never fails, even if the id is already present.
    pub fn add(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.records.push(StudentRecord::new(id, name));
    }

    /// Renames the first record whose id matches.
    pub fn edit(&mut self, id: &str, name: impl Into<String>) -> EditOutcome {
        match self.records.iter_mut().find(|r| r.has_id(id)) {
            Some(record) => {
                record.rename(name);
                EditOutcome::Updated
            }
            None => EditOutcome::NotFound,
        }
    }

    /// Removes every record whose id matches. Returns how many were removed.
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.has_id(id));
        before - self.records.len()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    /// Number of records, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the roster holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
