//! Interactive menu loop.
//!
//! A session asks for a role, runs that role's menu against the roster, and
//! returns to role selection when the menu exits. There is no command to
//! leave role selection: the session ends when input runs out.
//!
//! Every Add, Edit and Delete rewrites the store, whether or not the
//! command changed anything. Storage failures are reported on the console
//! and the session carries on; only console I/O errors end it early.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::console::Console;
use crate::error::RosterResult;
use crate::role::{Command, Role};
use crate::roster::{EditOutcome, Roster};
use crate::storage::RecordStore;

/// Console texts.
pub mod messages {
    /// Role-selection prompt.
    pub const ROLE_PROMPT: &str = "Enter UserName: (Choices: Admin, Teacher, Student)";
    /// Unknown role name.
    pub const INVALID_ROLE: &str = "Invalid role.";
    /// Command not in the current menu.
    pub const INVALID_CHOICE: &str = "Invalid choice.";
    /// Header printed before the record list.
    pub const LIST_HEADER: &str = "--- Student List ---";
    /// Add: id prompt.
    pub const ENTER_ID: &str = "Enter ID: ";
    /// Add: name prompt.
    pub const ENTER_NAME: &str = "Enter Name: ";
    /// Edit: id prompt.
    pub const ENTER_ID_TO_EDIT: &str = "Enter ID to edit: ";
    /// Edit: name prompt.
    pub const ENTER_NEW_NAME: &str = "Enter new name: ";
    /// Delete: id prompt.
    pub const ENTER_ID_TO_DELETE: &str = "Enter ID to delete: ";
    /// Add finished.
    pub const ADDED: &str = "Student added.";
    /// Edit renamed a record.
    pub const UPDATED: &str = "Student updated.";
    /// Edit found no record with the id.
    pub const NOT_FOUND: &str = "Student not found.";
    /// Delete finished, whether or not anything matched.
    pub const DELETED: &str = "Student deleted if found.";
    /// Printed when the data file does not exist yet.
    pub const STARTING_FRESH: &str = "No existing data found. Starting fresh.";
    /// Prefix for load failures.
    pub const READ_ERROR: &str = "Error reading file";
    /// Prefix for save failures.
    pub const SAVE_ERROR: &str = "Error saving file";
}

/// How control leaves a menu step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Stay in the current menu.
    Continue,
    /// Back to role selection.
    Leave,
    /// Input ended; stop the session.
    Hangup,
}

/// One interactive run over a console and a store.
pub struct Session<'a, R, W> {
    console: Console<R, W>,
    store: &'a dyn RecordStore,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session. Nothing is read until [`Session::load`] or
    /// [`Session::run`].
    pub fn new(console: Console<R, W>, store: &'a dyn RecordStore) -> Self {
        Self { console, store }
    }

    /// Loads the roster from the store.
    ///
    /// A missing file prints the "starting fresh" notice; any other failure
    /// prints the error. Both yield an empty roster.
    pub fn load(&mut self) -> RosterResult<Roster> {
        match self.store.load() {
            Ok(loaded) => {
                info!(
                    location = %self.store.location(),
                    records = loaded.records.len(),
                    skipped = loaded.skipped,
                    "roster loaded"
                );
                Ok(Roster::from_records(loaded.records))
            }
            Err(e) if e.is_not_found() => {
                info!(location = %self.store.location(), "no data file, starting empty");
                self.console.say(messages::STARTING_FRESH)?;
                Ok(Roster::new())
            }
            Err(e) => {
                warn!(location = %self.store.location(), error = %e, "failed to load roster");
                self.console.say(&format!("{}: {e}", messages::READ_ERROR))?;
                Ok(Roster::new())
            }
        }
    }

    /// Runs role selection until input ends.
    pub fn run(&mut self, roster: &mut Roster) -> RosterResult<()> {
        loop {
            self.console.say(&format!("\n{}", messages::ROLE_PROMPT))?;
            let Some(line) = self.console.read_line()? else {
                debug!("input closed at role selection");
                break;
            };

            let Some(role) = Role::parse(&line) else {
                self.console.say(messages::INVALID_ROLE)?;
                continue;
            };

            if !role.has_menu() {
                self.view(roster)?;
                continue;
            }

            debug!(%role, "entering menu");
            if self.run_menu(role, roster)? == Flow::Hangup {
                debug!(%role, "input closed inside menu");
                break;
            }
            debug!(%role, "left menu");
        }
        self.console.flush()?;
        Ok(())
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn run_menu(&mut self, role: Role, roster: &mut Roster) -> RosterResult<Flow> {
        let title = format!("\n{}", role.menu_title());
        loop {
            self.console.say(&title)?;
            let Some(line) = self.console.read_line()? else {
                return Ok(Flow::Hangup);
            };

            let command = Command::parse(&line).filter(|c| role.allows(*c));
            let flow = match command {
                Some(command) => self.execute(command, roster)?,
                None => {
                    self.console.say(messages::INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow != Flow::Continue {
                return Ok(flow);
            }
        }
    }

    fn execute(&mut self, command: Command, roster: &mut Roster) -> RosterResult<Flow> {
        match command {
            Command::Add => {
                let Some(id) = self.console.prompt(messages::ENTER_ID)? else {
                    return Ok(Flow::Hangup);
                };
                let Some(name) = self.console.prompt(messages::ENTER_NAME)? else {
                    return Ok(Flow::Hangup);
                };
                roster.add(id.as_str(), name);
                debug!(%id, "student added");
                self.console.say(messages::ADDED)?;
            }
            Command::Edit => {
                let Some(id) = self.console.prompt(messages::ENTER_ID_TO_EDIT)? else {
                    return Ok(Flow::Hangup);
                };
                let Some(name) = self.console.prompt(messages::ENTER_NEW_NAME)? else {
                    return Ok(Flow::Hangup);
                };
                match roster.edit(&id, name) {
                    EditOutcome::Updated => {
                        debug!(%id, "student updated");
                        self.console.say(messages::UPDATED)?;
                    }
                    EditOutcome::NotFound => {
                        debug!(%id, "edit target not found");
                        self.console.say(messages::NOT_FOUND)?;
                    }
                }
            }
            Command::Delete => {
                let Some(id) = self.console.prompt(messages::ENTER_ID_TO_DELETE)? else {
                    return Ok(Flow::Hangup);
                };
                let removed = roster.delete(&id);
                debug!(%id, removed, "students deleted");
                self.console.say(messages::DELETED)?;
            }
            Command::View => self.view(roster)?,
            Command::Exit => return Ok(Flow::Leave),
        }

        if command.is_mutation() {
            self.persist(roster)?;
        }
        Ok(Flow::Continue)
    }

    fn view(&mut self, roster: &Roster) -> RosterResult<()> {
        self.console.say(&format!("\n{}", messages::LIST_HEADER))?;
        for record in roster {
            self.console.say(&record.to_string())?;
        }
        Ok(())
    }

    fn persist(&mut self, roster: &Roster) -> RosterResult<()> {
        if let Err(e) = self.store.save(roster.records()) {
            warn!(location = %self.store.location(), error = %e, "failed to save roster");
            self.console.say(&format!("{}: {e}", messages::SAVE_ERROR))?;
        }
        Ok(())
    }
}
