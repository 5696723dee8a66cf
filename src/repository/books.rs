//! Book domain methods on Library

use validator::Validate;

use super::{next_id, Library};
use crate::{
    error::AppResult,
    models::{Book, CreateBook, UpdateBook},
};

impl Library {
    /// Get book by ID
    pub fn find_book_by_id(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Books whose title equals `title`, ignoring case. Not a substring search.
    pub fn find_books_by_title(&self, title: &str) -> Vec<&Book> {
        let wanted = title.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase() == wanted)
            .collect()
    }

    /// Add a book and return its assigned id
    pub fn add_book(&mut self, data: CreateBook) -> AppResult<i32> {
        data.validate()?;

        let id = next_id(&self.books)?;
        let book = data.into_book(id);
        tracing::info!("Adding book {} ({:?}, quantity {})", id, book.title, book.quantity);
        self.books.push(book);
        self.persist()?;
        Ok(id)
    }

    /// Overwrite the provided fields of a book. Returns false if the id is unknown.
    pub fn update_book(&mut self, id: i32, data: &UpdateBook) -> AppResult<bool> {
        data.validate()?;

        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        book.apply(data);
        tracing::info!("Updated book {}", id);
        self.persist()?;
        Ok(true)
    }

    /// Remove a book from the catalog. Members that still hold it keep the id
    /// in their borrowed list.
    pub fn remove_book(&mut self, id: i32) -> AppResult<bool> {
        let Some(pos) = self.books.iter().position(|b| b.id == id) else {
            return Ok(false);
        };
        let book = self.books.remove(pos);

        let holders = self.members.iter().filter(|m| m.has_borrowed(id)).count();
        if holders > 0 {
            tracing::warn!("Removed book {} is still on loan to {} member(s)", id, holders);
        } else {
            tracing::info!("Removed book {} ({:?})", id, book.title);
        }

        self.persist()?;
        Ok(true)
    }
}
