//! Library Console
//!
//! A single-user library management system: books, members, loans and
//! fines held in memory and persisted to flat JSON files after every change,
//! driven from an interactive text menu.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use repository::Library;
