//! Data models for the library console

pub mod book;
pub mod fine;
pub mod manager;
pub mod member;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use fine::FineTicket;
pub use manager::Manager;
pub use member::{CreateMember, Member, UpdateMember};

/// A record stored in one of the persisted collections
pub trait Entity {
    fn id(&self) -> i32;
}
