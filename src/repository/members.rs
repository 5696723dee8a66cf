//! Member and loan domain methods on Library

use super::{next_id, Library};
use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateMember, Member, UpdateMember},
};

/// One entry of a member's borrowed list, resolved against the catalog
#[derive(Debug, Clone, Copy)]
pub struct BorrowedBook<'a> {
    pub book_id: i32,
    /// `None` when the book was removed while on loan
    pub book: Option<&'a Book>,
}

impl Library {
    /// Get member by ID
    pub fn find_member_by_id(&self, id: i32) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Add a member and return its assigned id
    pub fn add_member(&mut self, data: CreateMember) -> AppResult<i32> {
        let id = next_id(&self.members)?;
        tracing::info!("Adding member {} ({:?})", id, data.name);
        self.members.push(data.into_member(id));
        self.persist()?;
        Ok(id)
    }

    /// Overwrite name and/or date of birth. Returns false if the id is unknown.
    pub fn update_member(&mut self, id: i32, data: &UpdateMember) -> AppResult<bool> {
        let Some(member) = self.members.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };
        member.apply(data);
        tracing::info!("Updated member {}", id);
        self.persist()?;
        Ok(true)
    }

    /// The member's loans in borrowing order, or `None` for an unknown member
    pub fn borrowed_books(&self, member_id: i32) -> Option<Vec<BorrowedBook<'_>>> {
        let member = self.find_member_by_id(member_id)?;
        Some(
            member
                .borrowed_books
                .iter()
                .map(|&book_id| BorrowedBook {
                    book_id,
                    book: self.find_book_by_id(book_id),
                })
                .collect(),
        )
    }

    /// Lend one copy of a book. Returns false, changing nothing, when no copy
    /// is on the shelf. There is no per-member loan limit.
    pub fn borrow_book(&mut self, member_id: i32, book_id: i32) -> AppResult<bool> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == member_id)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))?;
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", book_id)))?;

        if !book.is_available() {
            tracing::warn!("Book {} has no copy left for member {}", book_id, member_id);
            return Ok(false);
        }

        book.quantity -= 1;
        member.borrowed_books.push(book_id);
        tracing::info!("Member {} borrowed book {}", member_id, book_id);
        self.persist()?;
        Ok(true)
    }

    /// Take back one copy. Returns false, changing nothing, when the member
    /// does not hold the book. A book removed from the catalog can still be
    /// returned; its entry is dropped without restocking.
    pub fn return_book(&mut self, member_id: i32, book_id: i32) -> AppResult<bool> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == member_id)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))?;

        let Some(pos) = member.borrowed_books.iter().position(|&id| id == book_id) else {
            return Ok(false);
        };

        let book = self.books.iter_mut().find(|b| b.id == book_id);
        let restocked = match book {
            Some(ref book) => Some(book.quantity.checked_add(1).ok_or_else(|| {
                AppError::Validation(format!("Book {} cannot hold another copy", book_id))
            })?),
            None => None,
        };

        member.borrowed_books.remove(pos);
        match (book, restocked) {
            (Some(book), Some(quantity)) => book.quantity = quantity,
            _ => tracing::warn!("Returned book {} is no longer in the catalog", book_id),
        }
        tracing::info!("Member {} returned book {}", member_id, book_id);
        self.persist()?;
        Ok(true)
    }
}
