//! Roles and the commands they may issue.
//!
//! Every role works on the same roster; a role is only a capability set.
//! Parsing is exact and case-sensitive: `"admin"` is not `"Admin"`.

use std::fmt;

/// A menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Append a record.
    Add,
    /// Rename the first record with an id.
    Edit,
    /// List all records.
    View,
    /// Remove every record with an id.
    Delete,
    /// Leave the menu.
    Exit,
}

impl Command {
    /// Parses a menu line. Returns `None` for anything not spelled exactly.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "Add" => Some(Self::Add),
            "Edit" => Some(Self::Edit),
            "View" => Some(Self::View),
            "Delete" => Some(Self::Delete),
            "Exit" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The word the user types.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Edit => "Edit",
            Self::View => "View",
            Self::Delete => "Delete",
            Self::Exit => "Exit",
        }
    }

    /// Returns true if the command changes the roster.
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        matches!(self, Self::Add | Self::Edit | Self::Delete)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is using the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full CRUD.
    Admin,
    /// Edit and view.
    Teacher,
    /// View only, no menu.
    Viewer,
}

const ADMIN_COMMANDS: &[Command] = &[
    Command::Add,
    Command::Edit,
    Command::View,
    Command::Delete,
    Command::Exit,
];
const TEACHER_COMMANDS: &[Command] = &[Command::Edit, Command::View, Command::Exit];
const VIEWER_COMMANDS: &[Command] = &[Command::View];

impl Role {
    /// Parses the role-selection line.
    ///
    /// The viewer role is offered to users as `Student`; `Viewer` is accepted
    /// too.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "Admin" => Some(Self::Admin),
            "Teacher" => Some(Self::Teacher),
            "Student" | "Viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Commands available to this role, in menu order.
    #[must_use]
    pub const fn commands(self) -> &'static [Command] {
        match self {
            Self::Admin => ADMIN_COMMANDS,
            Self::Teacher => TEACHER_COMMANDS,
            Self::Viewer => VIEWER_COMMANDS,
        }
    }

    /// Returns true if this role may issue `command`.
    #[must_use]
    pub fn allows(self, command: Command) -> bool {
        self.commands().contains(&command)
    }

    /// Returns true if this role gets an interactive menu loop.
    #[must_use]
    pub const fn has_menu(self) -> bool {
        !matches!(self, Self::Viewer)
    }

    /// Menu header, e.g. `Teacher Menu: Edit, View, Exit`.
    #[must_use]
    pub fn menu_title(self) -> String {
        let commands: Vec<&str> = self.commands().iter().map(|c| c.as_str()).collect();
        format!("{self} Menu: {}", commands.join(", "))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Admin => "Admin",
            Self::Teacher => "Teacher",
            Self::Viewer => "Student",
        })
    }
}
