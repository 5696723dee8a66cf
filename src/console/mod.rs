//! Interactive console: login screen and nested numbered menus

pub mod commands;
pub mod prompt;
pub mod table;

use std::io::{BufRead, Write};

pub use commands::Command;
pub use prompt::Console;

use crate::{
    error::{AppError, AppResult},
    repository::Library,
};

/// Entries of a numbered menu, shown in order and selected by position
struct Menu {
    title: &'static str,
    entries: &'static [(&'static str, &'static [Command])],
    back_label: &'static str,
}

const MEMBER_MENU: Menu = Menu {
    title: "=== MEMBER MANAGEMENT ===",
    entries: &[
        ("Find member", &[Command::FindMember]),
        ("Add member", &[Command::AddMember]),
        ("Edit member", &[Command::EditMember]),
        ("List members", &[Command::DisplayMembers]),
        ("Show books borrowed by a member", &[Command::BorrowedBooks]),
    ],
    back_label: "Back to main menu",
};

const BOOK_MENU: Menu = Menu {
    title: "=== BOOK MANAGEMENT ===",
    entries: &[
        ("Find book", &[Command::FindBook]),
        ("Add book", &[Command::AddBook]),
        ("Edit book", &[Command::EditBook]),
        ("Remove book", &[Command::RemoveBook]),
        ("List books", &[Command::DisplayBooks]),
        ("Borrow book", &[Command::DisplayBooks, Command::BorrowBook]),
        ("Return book", &[Command::BorrowedBooks, Command::ReturnBook]),
    ],
    back_label: "Back to main menu",
};

const FINE_MENU: Menu = Menu {
    title: "=== FINE MANAGEMENT ===",
    entries: &[
        ("List fines", &[Command::DisplayFines]),
        ("Add fine", &[Command::AddFine]),
        ("Pay fine", &[Command::PayFine]),
    ],
    back_label: "Back to main menu",
};

/// Outcome of the login screen and menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The manager chose to quit
    Quit,
    /// The credentials were rejected
    LoginFailed,
    /// Input ran out before the manager quit
    InputClosed,
}

/// One manager's session over a library
#[derive(Debug)]
pub struct Session<'a, R, W> {
    library: &'a mut Library,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(library: &'a mut Library, input: R, output: W) -> Self {
        Self {
            library,
            console: Console::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the login screen, then the main menu until the manager quits.
    /// Storage and console I/O errors end the session with an error.
    pub fn run(&mut self) -> AppResult<SessionEnd> {
        match self.login_then_menu() {
            Err(AppError::InputClosed) => {
                tracing::info!("Input closed, ending session");
                Ok(SessionEnd::InputClosed)
            }
            other => other,
        }
    }

    fn login_then_menu(&mut self) -> AppResult<SessionEnd> {
        self.console.say("=== LIBRARY MANAGEMENT SYSTEM LOGIN ===")?;
        let username = self.console.ask("Username: ")?;
        let password = self.console.ask("Password: ")?;

        let Some(manager) = self.library.login(&username, &password) else {
            self.console.say("Login failed.")?;
            return Ok(SessionEnd::LoginFailed);
        };
        let greeting = format!("Welcome, {}!", manager.full_name);
        self.console.say(greeting)?;

        self.main_menu()?;
        Ok(SessionEnd::Quit)
    }

    fn main_menu(&mut self) -> AppResult<()> {
        loop {
            self.console.say("\n=== MAIN MENU ===")?;
            self.console.say("1. Member management")?;
            self.console.say("2. Book management")?;
            self.console.say("3. Fine management")?;
            self.console.say("4. Quit")?;

            match self.console.ask("Choose (1-4): ")?.trim() {
                "1" => self.submenu(&MEMBER_MENU)?,
                "2" => self.submenu(&BOOK_MENU)?,
                "3" => self.submenu(&FINE_MENU)?,
                "4" => {
                    self.console.say("Thank you for using the library system!")?;
                    return Ok(());
                }
                _ => self.console.say("Invalid choice!")?,
            }
        }
    }

    fn submenu(&mut self, menu: &Menu) -> AppResult<()> {
        let back = menu.entries.len() + 1;
        loop {
            self.console.say(format!("\n{}", menu.title))?;
            for (i, (label, _)) in menu.entries.iter().enumerate() {
                self.console.say(format!("{}. {}", i + 1, label))?;
            }
            self.console.say(format!("{}. {}", back, menu.back_label))?;

            let choice = self.console.ask(&format!("Choose (1-{}): ", back))?;
            let selected = choice.trim().parse::<usize>().ok();
            match selected {
                Some(n) if n == back => return Ok(()),
                Some(n) if (1..back).contains(&n) => {
                    let (_, commands) = menu.entries[n - 1];
                    for &command in commands {
                        if !self.execute(command)? {
                            break;
                        }
                    }
                }
                _ => self.console.say("Invalid choice!")?,
            }
        }
    }

    /// Run one command, reporting user-facing errors. Returns whether the
    /// command completed.
    fn execute(&mut self, command: Command) -> AppResult<bool> {
        match command.execute(self.library, &mut self.console) {
            Ok(()) => Ok(true),
            Err(e) if e.is_user_facing() => {
                tracing::debug!("{:?} aborted: {}", command, e);
                let message = match e {
                    AppError::Validation(msg) => format!("Invalid input: {}", msg),
                    AppError::NotFound(msg) => msg,
                    other => other.to_string(),
                };
                self.console.say(message)?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
