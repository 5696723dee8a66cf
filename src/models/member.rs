//! Member (borrower) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Library member
///
/// `borrowed_books` holds book ids, one entry per copy on loan, resolved
/// through the repository on access. A removed book stays listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub borrowed_books: Vec<i32>,
    #[serde(default)]
    pub fines: Vec<i32>,
}

impl Member {
    pub fn has_borrowed(&self, book_id: i32) -> bool {
        self.borrowed_books.contains(&book_id)
    }

    pub(crate) fn apply(&mut self, data: &UpdateMember) {
        if let Some(ref name) = data.name {
            self.name = name.clone();
        }
        if let Some(date_of_birth) = data.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
    }
}

impl Entity for Member {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Create member request
#[derive(Debug, Clone)]
pub struct CreateMember {
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl CreateMember {
    pub(crate) fn into_member(self, id: i32) -> Member {
        Member {
            id,
            name: self.name,
            date_of_birth: self.date_of_birth,
            borrowed_books: Vec::new(),
            fines: Vec::new(),
        }
    }
}

/// Update member request; loans and fines are never touched
#[derive(Debug, Clone, Default)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}
