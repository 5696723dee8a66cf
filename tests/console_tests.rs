//! Console session tests driven with scripted input

use std::io::Cursor;

use library_console::{
    config::{AdminConfig, SavePolicy},
    console::{Session, SessionEnd},
    repository::JsonStore,
    Library,
};
use tempfile::TempDir;

fn open_temp() -> (TempDir, Library) {
    let dir = tempfile::tempdir().expect("tempdir");
    let library = Library::open(
        JsonStore::new(dir.path()),
        SavePolicy::Propagate,
        &AdminConfig::default(),
    )
    .expect("open library");
    (dir, library)
}

/// Run a session over `script` and return how it ended plus everything printed
fn run(library: &mut Library, script: &str) -> (SessionEnd, String) {
    let mut session = Session::new(library, Cursor::new(script.to_string()), Vec::new());
    let end = session.run().expect("session");
    let output = String::from_utf8(session.into_output()).expect("utf8");
    (end, output)
}

const LOGIN: &str = "admin\nadmin123\n";

#[test]
fn test_login_failure() {
    let (_dir, mut library) = open_temp();
    let (end, output) = run(&mut library, "admin\nnope\n");
    assert_eq!(end, SessionEnd::LoginFailed);
    assert!(output.contains("Login failed."));
}

#[test]
fn test_quit_from_main_menu() {
    let (_dir, mut library) = open_temp();
    let (end, output) = run(&mut library, &format!("{LOGIN}4\n"));
    assert_eq!(end, SessionEnd::Quit);
    assert!(output.contains("Welcome, Administrator!"));
    assert!(output.contains("Thank you for using the library system!"));
}

#[test]
fn test_end_of_input_ends_session() {
    let (_dir, mut library) = open_temp();
    let (end, _) = run(&mut library, &format!("{LOGIN}2\n2\nDune\n"));
    assert_eq!(end, SessionEnd::InputClosed);
    assert!(library.books().is_empty());
}

#[test]
fn test_add_and_find_book() {
    let (_dir, mut library) = open_temp();
    let script = format!("{LOGIN}2\n2\nDune\nFrank Herbert\nChilton\n2\n1\nDUNE\n1\nDu\n8\n4\n");
    let (end, output) = run(&mut library, &script);

    assert_eq!(end, SessionEnd::Quit);
    assert!(output.contains("Book added with ID 1."));
    assert!(output.contains("No book found."));
    let book = library.find_book_by_id(1).unwrap();
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.publisher, "Chilton");
    assert_eq!(book.quantity, 2);
}

#[test]
fn test_invalid_quantity_aborts_command_only() {
    let (_dir, mut library) = open_temp();
    let script = format!("{LOGIN}2\n2\nDune\nHerbert\nChilton\nlots\n2\nDune\nHerbert\nChilton\n-1\n8\n4\n");
    let (end, output) = run(&mut library, &script);

    assert_eq!(end, SessionEnd::Quit);
    assert!(output.contains("Invalid input: \"lots\" is not a valid quantity"));
    assert!(output.contains("Invalid input: Quantity cannot be negative"));
    assert!(library.books().is_empty());
}

#[test]
fn test_member_add_edit_and_borrow() {
    let (_dir, mut library) = open_temp();
    let script = format!(
        "{LOGIN}\
         1\n2\nAlice\n1999-01-01\n01/01/1999\n\
         3\n1\n\n15/06/1990\n6\n\
         2\n2\nDune\nHerbert\nChilton\n1\n\
         6\n1\n1\n\
         6\n1\n1\n\
         8\n4\n"
    );
    let (end, output) = run(&mut library, &script);

    assert_eq!(end, SessionEnd::Quit);
    assert!(output.contains("Invalid date format, please try again."));
    assert!(output.contains("Member added with ID 1."));
    assert!(output.contains("Member updated."));
    assert!(output.contains("Book borrowed."));
    assert!(output.contains("Cannot borrow this book: no copy is currently available."));

    let member = library.find_member_by_id(1).unwrap();
    assert_eq!(member.name, "Alice");
    assert_eq!(member.date_of_birth.to_string(), "1990-06-15");
    assert_eq!(member.borrowed_books, vec![1]);
    assert_eq!(library.find_book_by_id(1).unwrap().quantity, 0);
}

#[test]
fn test_return_book_menu() {
    let (_dir, mut library) = open_temp();
    let script = format!(
        "{LOGIN}\
         1\n2\nBob\n02/03/2001\n6\n\
         2\n2\nSolaris\nLem\nMON\n3\n\
         6\n1\n1\n\
         7\n1\n1\n1\n\
         7\n1\n1\n1\n\
         8\n4\n"
    );
    let (_, output) = run(&mut library, &script);

    assert!(output.contains("Book returned."));
    assert!(output.contains("Cannot return this book: the member has not borrowed it."));
    assert!(output.contains("0 book(s) borrowed in total"));
    assert_eq!(library.find_book_by_id(1).unwrap().quantity, 3);
}

#[test]
fn test_unknown_member_is_reported() {
    let (_dir, mut library) = open_temp();
    let (end, output) = run(&mut library, &format!("{LOGIN}1\n1\n42\n1\nabc\n6\n4\n"));
    assert_eq!(end, SessionEnd::Quit);
    assert!(output.contains("No member with ID 42"));
    assert!(output.contains("Invalid input: \"abc\" is not a valid ID"));
}

#[test]
fn test_fines_menu() {
    let (_dir, mut library) = open_temp();
    let script = format!(
        "{LOGIN}\
         1\n2\nCarol\n10/10/2010\n6\n\
         3\n2\n7\n\
         2\n1\nLate return\nabc\n\
         2\n1\nLate return\n12.50\n\
         1\n3\n1\n3\n1\n3\n9\n4\n4\n"
    );
    let (end, output) = run(&mut library, &script);

    assert_eq!(end, SessionEnd::Quit);
    assert!(output.contains("No member with ID 7"));
    assert!(output.contains("Invalid input: \"abc\" is not a valid amount"));
    assert!(output.contains("Fine 1 added."));
    assert!(output.contains("Late return"));
    assert!(output.contains("Fine 1 has been paid."));
    assert!(output.contains("Fine 1 was already paid."));
    assert!(output.contains("Fine 9 not found"));
    assert_eq!(library.fines().len(), 1);
    assert!(library.find_fine_by_id(1).unwrap().is_paid());
}

#[test]
fn test_invalid_menu_choice() {
    let (_dir, mut library) = open_temp();
    let (end, output) = run(&mut library, &format!("{LOGIN}9\n3\n0\n4\n4\n"));
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(output.matches("Invalid choice!").count(), 2);
}
