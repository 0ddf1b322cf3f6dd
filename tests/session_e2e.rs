//! End-to-end session tests against the flat-file backend.
//!
//! These tests verify that:
//! - Console dialogues for each role produce the expected output
//! - Every mutation is visible in the data file afterwards
//! - A restarted session sees what the previous one saved

use std::fs;
use std::io::Cursor;
use std::path::Path;

use roster::{Console, FlatFileStore, Roster, Session, StudentRecord};
use tempfile::tempdir;

/// Runs one full session (load + role loop) over `input`.
fn run_session(path: &Path, input: &str) -> (String, Roster) {
    let store = FlatFileStore::new(path).with_sync_on_write(false);
    let console = Console::new(Cursor::new(input.to_string()), Vec::new());
    let mut session = Session::new(console, &store);

    let mut roster = session.load().unwrap();
    session.run(&mut roster).unwrap();

    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    (output, roster)
}

#[test]
fn test_first_run_creates_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");

    let (output, _) = run_session(&path, "Admin\nAdd\nS1\nAlice\nExit\n");

    assert!(output.starts_with("No existing data found. Starting fresh.\n"));
    assert!(output.contains("Enter ID: Enter Name: Student added.\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "S1,Alice\n");
}

#[test]
fn test_documented_walkthrough() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");

    let input = "\
Admin
Add
S1
Alice
View
Edit
S1
Bob
View
Delete
S1
View
Exit
";
    let (output, roster) = run_session(&path, input);

    let lists: Vec<&str> = output.split("--- Student List ---\n").skip(1).collect();
    assert_eq!(lists.len(), 3);
    assert!(lists[0].starts_with("ID: S1, Name: Alice\n\n"));
    assert!(lists[1].starts_with("ID: S1, Name: Bob\n\n"));
    assert!(lists[2].starts_with("\nAdmin Menu"));

    assert!(roster.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_restart_sees_saved_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");

    run_session(&path, "Admin\nAdd\nS1\nAlice\nAdd\nS2\nSmith, John\nExit\n");
    let (output, roster) = run_session(&path, "Student\n");

    assert!(!output.contains("Starting fresh"));
    assert!(output.contains("ID: S1, Name: Alice\nID: S2, Name: Smith, John\n"));
    assert_eq!(
        roster.records(),
        &[
            StudentRecord::new("S1", "Alice"),
            StudentRecord::new("S2", "Smith, John"),
        ]
    );
}

#[test]
fn test_teacher_edit_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(&path, "S1,Alice\nS2,Bob\n").unwrap();

    let (output, _) = run_session(&path, "Teacher\nEdit\nS2\nRobert\nExit\n");

    assert!(output.contains("Enter ID to edit: Enter new name: Student updated.\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "S1,Alice\nS2,Robert\n");
}

#[test]
fn test_delete_removes_duplicates_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(&path, "S1,Alice\nS2,Bob\nS1,Alicia\n").unwrap();

    let (output, roster) = run_session(&path, "Admin\nDelete\nS1\nExit\n");

    assert!(output.contains("Enter ID to delete: Student deleted if found.\n"));
    assert_eq!(roster.records(), &[StudentRecord::new("S2", "Bob")]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "S2,Bob\n");
}

#[test]
fn test_malformed_lines_dropped_on_next_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(&path, "S1,Alice\nthis line has no comma\nS2,Bob\n").unwrap();

    let (output, roster) = run_session(&path, "Admin\nView\nAdd\nS3\nCarol\nExit\n");

    assert!(!output.contains("Error"));
    assert_eq!(roster.len(), 3);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "S1,Alice\nS2,Bob\nS3,Carol\n"
    );
}

#[test]
fn test_roles_can_be_switched_within_one_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");

    let input = "Admin\nAdd\nS1\nAlice\nExit\nTeacher\nEdit\nS1\nAlicia\nExit\nStudent\n";
    let (output, _) = run_session(&path, input);

    assert!(output.contains("\nAdmin Menu: Add, Edit, View, Delete, Exit\n"));
    assert!(output.contains("\nTeacher Menu: Edit, View, Exit\n"));
    assert!(output.ends_with(
        "--- Student List ---\nID: S1, Name: Alicia\n\nEnter UserName: (Choices: Admin, Teacher, Student)\n"
    ));
}

#[test]
fn test_unreadable_data_file_starts_empty() {
    let dir = tempdir().unwrap();
    // Directory in place of the data file: unreadable and unwritable.
    let path = dir.path().join("students.txt");
    fs::create_dir(&path).unwrap();

    let (output, roster) = run_session(&path, "Admin\nAdd\nS1\nAlice\nExit\n");

    assert!(output.starts_with("Error reading file: "));
    assert!(output.contains("Error saving file: "));
    assert_eq!(roster.len(), 1);
}
