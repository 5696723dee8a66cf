//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Entity;

/// Book record; `quantity` counts the copies currently on the shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub publisher: String,
    pub author: String,
    pub quantity: i32,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    pub(crate) fn apply(&mut self, data: &UpdateBook) {
        if let Some(ref title) = data.title {
            self.title = title.clone();
        }
        if let Some(ref publisher) = data.publisher {
            self.publisher = publisher.clone();
        }
        if let Some(ref author) = data.author {
            self.author = author.clone();
        }
        if let Some(quantity) = data.quantity {
            self.quantity = quantity;
        }
    }
}

impl Entity for Book {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Create book request
#[derive(Debug, Clone, Validate)]
pub struct CreateBook {
    pub title: String,
    pub publisher: String,
    pub author: String,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}

impl CreateBook {
    pub(crate) fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            publisher: self.publisher,
            author: self.author,
            quantity: self.quantity,
        }
    }
}

/// Update book request; `None` keeps the current value
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub author: Option<String>,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
}
