//! Roster console
//!
//! Interactive role-based editor for the student data file.

use std::io;
use std::process::ExitCode;

use roster::config::{parse_args, USAGE};
use roster::logging::init_logging;
use roster::{CliAction, Console, FlatFileStore, RosterError, Session};

fn run() -> Result<(), RosterError> {
    let action = parse_args(std::env::args().skip(1), |key| std::env::var(key).ok())?;

    let config = match action {
        CliAction::Run(config) => config,
        CliAction::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        CliAction::Version => {
            println!("roster {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    init_logging(&config.log_filter);

    let store = FlatFileStore::new(&config.data_file).with_sync_on_write(config.sync_on_write);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, &store);
    let mut roster = session.load()?;
    session.run(&mut roster)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_config() {
                eprintln!("Try 'roster --help' for more information.");
            }
            ExitCode::FAILURE
        }
    }
}
