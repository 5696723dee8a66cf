//! Fine ticket model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Monetary penalty issued to a member
///
/// Only `FineTicket::new` builds tickets, so a ticket always starts unpaid
/// and stamped with its creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineTicket {
    pub id: i32,
    pub member_id: i32,
    pub reason: String,
    /// Not validated; zero and negative amounts are accepted
    pub amount: Decimal,
    paid: bool,
    issued_at: DateTime<Utc>,
}

impl FineTicket {
    pub fn new(member_id: i32, reason: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: 0,
            member_id,
            reason: reason.into(),
            amount,
            paid: false,
            issued_at: Utc::now(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Mark the ticket paid, returning whether it was unpaid before
    pub(crate) fn mark_paid(&mut self) -> bool {
        let was_unpaid = !self.paid;
        self.paid = true;
        was_unpaid
    }
}

impl Entity for FineTicket {
    fn id(&self) -> i32 {
        self.id
    }
}
