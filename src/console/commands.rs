//! One command per user action
//!
//! Commands read their own prompts, call into the [`Library`] and print the
//! outcome. Malformed input surfaces as `AppError::Validation` before any
//! state is touched.

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    models::{CreateBook, CreateMember, FineTicket, UpdateBook, UpdateMember},
    repository::Library,
};

use super::prompt::{parse_amount, parse_date, parse_quantity, Console, DATE_FORMAT};
use super::table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FindMember,
    AddMember,
    EditMember,
    DisplayMembers,
    BorrowedBooks,
    FindBook,
    AddBook,
    EditBook,
    RemoveBook,
    DisplayBooks,
    BorrowBook,
    ReturnBook,
    DisplayFines,
    AddFine,
    PayFine,
}

impl Command {
    pub fn execute<R: BufRead, W: Write>(
        self,
        library: &mut Library,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        match self {
            Command::FindMember => find_member(library, console),
            Command::AddMember => add_member(library, console),
            Command::EditMember => edit_member(library, console),
            Command::DisplayMembers => display_members(library, console),
            Command::BorrowedBooks => borrowed_books(library, console),
            Command::FindBook => find_book(library, console),
            Command::AddBook => add_book(library, console),
            Command::EditBook => edit_book(library, console),
            Command::RemoveBook => remove_book(library, console),
            Command::DisplayBooks => display_books(library, console),
            Command::BorrowBook => borrow_book(library, console),
            Command::ReturnBook => return_book(library, console),
            Command::DisplayFines => display_fines(library, console),
            Command::AddFine => add_fine(library, console),
            Command::PayFine => pay_fine(library, console),
        }
    }
}

fn member_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("No member with ID {}", id))
}

fn find_member<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== FIND MEMBER ===")?;
    let id = console.ask_id("Member ID: ")?;
    let member = library.find_member_by_id(id).ok_or_else(|| member_not_found(id))?;

    console.say(format!(
        "ID: {}, Name: {}, Date of birth: {}",
        member.id,
        member.name,
        member.date_of_birth.format(DATE_FORMAT)
    ))?;
    console.say("Borrowed books:")?;
    for loan in library.borrowed_books(id).unwrap_or_default() {
        match loan.book {
            Some(book) => console.say(format!("- {}", book.title))?,
            None => console.say(format!("- book #{} (removed from catalog)", loan.book_id))?,
        }
    }

    let unpaid = library.fines_for_member(id).iter().filter(|f| !f.is_paid()).count();
    if unpaid > 0 {
        console.say(format!("Unpaid fines: {}", unpaid))?;
    }
    Ok(())
}

fn add_member<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== ADD MEMBER ===")?;
    let name = console.ask("Name: ")?;
    let date_of_birth = loop {
        match parse_date(&console.ask("Date of birth (dd/mm/yyyy): ")?) {
            Ok(date) => break date,
            Err(_) => console.say("Invalid date format, please try again.")?,
        }
    };

    let id = library.add_member(CreateMember { name, date_of_birth })?;
    console.say(format!("Member added with ID {}.", id))
}

fn edit_member<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== EDIT MEMBER ===")?;
    let id = console.ask_id("Member ID: ")?;
    if library.find_member_by_id(id).is_none() {
        return Err(member_not_found(id));
    }

    let mut update = UpdateMember {
        name: console.ask_optional("New name (Enter to keep): ")?,
        date_of_birth: None,
    };
    if let Some(text) = console.ask_optional("New date of birth dd/mm/yyyy (Enter to keep): ")? {
        match parse_date(&text) {
            Ok(date) => update.date_of_birth = Some(date),
            Err(_) => console.say("Invalid date format, keeping the previous date of birth.")?,
        }
    }

    library.update_member(id, &update)?;
    console.say("Member updated.")
}

fn display_members<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== MEMBERS ===")?;
    if library.members().is_empty() {
        return console.say("No members yet.");
    }
    table::members(console.output(), library.members())
}

fn borrowed_books<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== BORROWED BOOKS ===")?;
    let id = console.ask_id("Member ID: ")?;
    let loans = library.borrowed_books(id).ok_or_else(|| member_not_found(id))?;

    if loans.is_empty() {
        console.say("No books borrowed.")?;
    }
    table::borrowed_books(console.output(), &loans)?;
    console.say(format!("{} book(s) borrowed in total", loans.len()))
}

fn find_book<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== FIND BOOK ===")?;
    let title = console.ask("Title: ")?;
    let books = library.find_books_by_title(&title);
    if books.is_empty() {
        return console.say("No book found.");
    }
    table::books(console.output(), &books)
}

fn add_book<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== ADD BOOK ===")?;
    let title = console.ask("Title: ")?;
    let author = console.ask("Author: ")?;
    let publisher = console.ask("Publisher: ")?;
    let quantity = parse_quantity(&console.ask("Quantity: ")?)?;

    let id = library.add_book(CreateBook {
        title,
        publisher,
        author,
        quantity,
    })?;
    console.say(format!("Book added with ID {}.", id))
}

fn edit_book<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== EDIT BOOK ===")?;
    let id = console.ask_id("Book ID: ")?;
    if library.find_book_by_id(id).is_none() {
        return Err(AppError::NotFound(format!("No book with ID {}", id)));
    }

    let mut update = UpdateBook {
        title: console.ask_optional("New title (Enter to keep): ")?,
        author: console.ask_optional("New author (Enter to keep): ")?,
        publisher: console.ask_optional("New publisher (Enter to keep): ")?,
        quantity: None,
    };
    if let Some(text) = console.ask_optional("New quantity (Enter to keep): ")? {
        match parse_quantity(&text) {
            Ok(quantity) => update.quantity = Some(quantity),
            Err(_) => console.say("Invalid quantity, keeping the previous quantity.")?,
        }
    }

    library.update_book(id, &update)?;
    console.say("Book updated.")
}

fn remove_book<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== REMOVE BOOK ===")?;
    let id = console.ask_id("Book ID to remove: ")?;
    if library.remove_book(id)? {
        console.say("Book removed.")
    } else {
        Err(AppError::NotFound(format!("No book with ID {}", id)))
    }
}

fn display_books<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== BOOKS ===")?;
    if library.books().is_empty() {
        return console.say("No books yet.");
    }
    let books: Vec<_> = library.books().iter().collect();
    table::books(console.output(), &books)
}

fn borrow_book<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== BORROW BOOK ===")?;
    let member_id = console.ask_id("Member ID: ")?;
    if library.find_member_by_id(member_id).is_none() {
        return Err(member_not_found(member_id));
    }
    let book_id = console.ask_id("Book ID: ")?;

    if library.borrow_book(member_id, book_id)? {
        console.say("Book borrowed.")
    } else {
        console.say("Cannot borrow this book: no copy is currently available.")
    }
}

fn return_book<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== RETURN BOOK ===")?;
    let member_id = console.ask_id("Member ID: ")?;
    if library.find_member_by_id(member_id).is_none() {
        return Err(member_not_found(member_id));
    }
    let book_id = console.ask_id("Book ID: ")?;

    if library.return_book(member_id, book_id)? {
        console.say("Book returned.")
    } else {
        console.say("Cannot return this book: the member has not borrowed it.")
    }
}

fn display_fines<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== FINES ===")?;
    if library.fines().is_empty() {
        return console.say("No fines.");
    }
    table::fines(console.output(), library.fines())
}

fn add_fine<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== ADD FINE ===")?;
    let member_id = console.ask_id("Member ID to fine: ")?;
    if library.find_member_by_id(member_id).is_none() {
        return Err(member_not_found(member_id));
    }
    let reason = console.ask("Reason: ")?;
    let amount = parse_amount(&console.ask("Amount: ")?)?;

    let id = library.add_fine(FineTicket::new(member_id, reason, amount), member_id)?;
    console.say(format!("Fine {} added.", id))
}

fn pay_fine<R: BufRead, W: Write>(
    library: &mut Library,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say("\n=== PAY FINE ===")?;
    let id = console.ask_id("Fine ID to pay: ")?;
    if library.pay_fine(id)? {
        console.say(format!("Fine {} has been paid.", id))
    } else {
        console.say(format!("Fine {} was already paid.", id))
    }
}
