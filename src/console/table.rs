//! Fixed-width tables for the console

use std::io::Write;

use crate::{
    error::AppResult,
    models::{Book, FineTicket, Member},
    repository::BorrowedBook,
};

use super::prompt::DATE_FORMAT;

fn separator<W: Write>(out: &mut W, width: usize) -> AppResult<()> {
    writeln!(out, "{}", "-".repeat(width))?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

pub fn books<W: Write>(out: &mut W, books: &[&Book]) -> AppResult<()> {
    writeln!(
        out,
        "{:<10}| {:<30}| {:<20}| {:<20}| {:<10}| {:<10}",
        "ID", "Title", "Author", "Publisher", "Quantity", "Available"
    )?;
    separator(out, 110)?;
    for book in books {
        writeln!(
            out,
            "{:<10}| {:<30}| {:<20}| {:<20}| {:<10}| {:<10}",
            book.id,
            book.title,
            book.author,
            book.publisher,
            book.quantity,
            yes_no(book.is_available())
        )?;
    }
    Ok(())
}

pub fn borrowed_books<W: Write>(out: &mut W, loans: &[BorrowedBook<'_>]) -> AppResult<()> {
    writeln!(out, "{:<10}| {:<30}| {:<20}| {:<20}|", "ID", "Title", "Author", "Publisher")?;
    separator(out, 88)?;
    for loan in loans {
        match loan.book {
            Some(book) => writeln!(
                out,
                "{:<10}| {:<30}| {:<20}| {:<20}|",
                book.id, book.title, book.author, book.publisher
            )?,
            None => writeln!(
                out,
                "{:<10}| {:<30}| {:<20}| {:<20}|",
                loan.book_id, "(removed from catalog)", "", ""
            )?,
        }
    }
    Ok(())
}

pub fn members<W: Write>(out: &mut W, members: &[Member]) -> AppResult<()> {
    writeln!(out, "{:<10}| {:<30}| {:<15}| {:<15}", "ID", "Name", "Date of birth", "Borrowed")?;
    separator(out, 75)?;
    for member in members {
        writeln!(
            out,
            "{:<10}| {:<30}| {:<15}| {:<15}",
            member.id,
            member.name,
            member.date_of_birth.format(DATE_FORMAT).to_string(),
            member.borrowed_books.len()
        )?;
    }
    Ok(())
}

pub fn fines<W: Write>(out: &mut W, fines: &[FineTicket]) -> AppResult<()> {
    writeln!(
        out,
        "{:<10}| {:<15}| {:<30}| {:<10}| {:<10}| {:<15}",
        "ID", "Member ID", "Reason", "Amount", "Paid", "Issued"
    )?;
    separator(out, 100)?;
    for fine in fines {
        writeln!(
            out,
            "{:<10}| {:<15}| {:<30}| {:<10}| {:<10}| {:<15}",
            fine.id,
            fine.member_id,
            fine.reason,
            fine.amount.to_string(),
            yes_no(fine.is_paid()),
            fine.issued_at().format(DATE_FORMAT).to_string()
        )?;
    }
    Ok(())
}
