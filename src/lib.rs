//! # Roster - role-based student records on a flat file
//!
//! Roster keeps an ordered list of student records (`id`, `name`) in a plain
//! text file, one `id,name` line per record, and exposes it through a
//! line-based console menu whose commands depend on the user's role.
//!
//! ## Core Concepts
//!
//! - **StudentRecord**: an `(id, name)` pair; ids are not required to be unique
//! - **Roster**: the in-memory ordered record list every role shares
//! - **RecordStore**: persistence backend; the whole roster is rewritten on every change
//! - **Role**: Admin (add/edit/view/delete), Teacher (edit/view) or Viewer (view only)
//! - **Session**: the role-selection loop driving menus over a console
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io;
//! use roster::{Console, FlatFileStore, Session};
//!
//! let store = FlatFileStore::new("students.txt");
//! let console = Console::new(io::stdin().lock(), io::stdout().lock());
//! let mut session = Session::new(console, &store);
//! let mut roster = session.load()?;
//! session.run(&mut roster)?;
//! # Ok::<(), roster::RosterError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod role;
pub mod roster;
pub mod session;
pub mod storage;
pub mod student;

// Re-export primary types at crate root for convenience
pub use config::{CliAction, ConfigError, RosterConfig};
pub use console::Console;
pub use error::{RosterError, RosterResult};
pub use role::{Command, Role};
pub use roster::{EditOutcome, Roster};
pub use session::Session;
pub use storage::{FlatFileStore, Loaded, MemoryStore, RecordStore, StorageError};
pub use student::StudentRecord;
