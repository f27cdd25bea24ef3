//! Interactive console frontend for the library core.
//!
//! # Responsibility
//! - Resolve the data directory and start file logging under it.
//! - Drive the main menu; commands fail individually, the session does not.

mod console;
mod menus;

use console::Console;
use library_core::{default_log_level, init_logging, resolve_data_dir, Library, LOG_DIR_NAME};
use log::{error, info};
use menus::Section;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const MAIN_ITEMS: [(&str, &str); 4] = [
    ("1", "Books"),
    ("2", "Categories"),
    ("3", "Members"),
    ("0", "Exit"),
];

fn main() -> ExitCode {
    let data_dir = match resolve_data_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("cannot locate library data: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(default_log_level(), data_dir.join(LOG_DIR_NAME)) {
        eprintln!("logging disabled: {err}");
    }
    let library = Library::open_in(data_dir);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    match run(&mut console, &library) {
        Ok(()) => {
            info!("event=app_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            info!("event=app_exit module=cli status=ok reason=input_closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={}", err);
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, library: &Library) -> io::Result<()> {
    loop {
        console.header("Library Control System", "Main menu")?;
        let section = match console.menu(&MAIN_ITEMS)?.as_str() {
            "1" => Section::Books,
            "2" => Section::Categories,
            "3" => Section::Members,
            "0" => return Ok(()),
            _ => {
                console.error("Invalid choice.")?;
                continue;
            }
        };
        menus::run_section(console, library, section)?;
    }
}
