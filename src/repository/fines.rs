//! Fine domain methods on Library

use super::{next_id, Library};
use crate::{
    error::{AppError, AppResult},
    models::FineTicket,
};

impl Library {
    pub fn find_fine_by_id(&self, id: i32) -> Option<&FineTicket> {
        self.fines.iter().find(|f| f.id == id)
    }

    /// Fines issued to a member, in issue order
    pub fn fines_for_member(&self, member_id: i32) -> Vec<&FineTicket> {
        self.fines.iter().filter(|f| f.member_id == member_id).collect()
    }

    /// Register a ticket against `member_id` and return its assigned id.
    /// The member's own `fines` list is left as is.
    pub fn add_fine(&mut self, mut fine: FineTicket, member_id: i32) -> AppResult<i32> {
        fine.id = next_id(&self.fines)?;
        fine.member_id = member_id;
        let id = fine.id;
        tracing::info!("Fine {} of {} issued to member {}", id, fine.amount, member_id);
        self.fines.push(fine);
        self.persist()?;
        Ok(id)
    }

    /// Mark a ticket paid. Paying twice is not an error; the result tells
    /// whether this call settled it (`false` if it was already paid).
    pub fn pay_fine(&mut self, id: i32) -> AppResult<bool> {
        let fine = self
            .fines
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Fine {} not found", id)))?;

        let settled = fine.mark_paid();
        if settled {
            tracing::info!("Fine {} paid", id);
        } else {
            tracing::warn!("Fine {} was already paid", id);
        }
        self.persist()?;
        Ok(settled)
    }
}
