//! Line codec for the flat-file format.
//!
//! Format:
//! ```text
//! <id>,<name>\n
//! <id>,<name>\n
//! ...
//! ```
//!
//! Lines split on the first comma only, so names may contain commas and ids
//! may not. A line without any comma carries no record and is skipped.

use std::io::{BufRead, Result as IoResult, Write};

use crate::student::StudentRecord;

use super::traits::Loaded;

/// Field separator.
pub const SEPARATOR: char = ',';

/// Formats one record as a line, without the trailing newline.
#[must_use]
pub fn encode_line(record: &StudentRecord) -> String {
    format!("{}{SEPARATOR}{}", record.id, record.name)
}

/// Parses one line. Returns `None` when the line has no separator.
#[must_use]
pub fn decode_line(line: &str) -> Option<StudentRecord> {
    let (id, name) = line.split_once(SEPARATOR)?;
    Some(StudentRecord::new(id, name))
}

/// Writes every record as its own newline-terminated line.
pub fn write_records<'a>(
    writer: &mut impl Write,
    records: impl IntoIterator<Item = &'a StudentRecord>,
) -> IoResult<()> {
    for record in records {
        writeln!(writer, "{}", encode_line(record))?;
    }
    Ok(())
}

/// Reads one line without its terminator. `None` means end of input.
///
/// Invalid UTF-8 is replaced with U+FFFD instead of failing, so one bad byte
/// only degrades its own line.
pub fn read_line_lossy(reader: &mut impl BufRead) -> IoResult<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Reads records until EOF, skipping lines with no separator.
///
/// `\r\n` line endings are accepted.
pub fn read_records(mut reader: impl BufRead) -> IoResult<Loaded> {
    let mut loaded = Loaded::default();
    while let Some(line) = read_line_lossy(&mut reader)? {
        match decode_line(&line) {
            Some(record) => loaded.records.push(record),
            None => loaded.skipped += 1,
        }
    }
    Ok(loaded)
}
