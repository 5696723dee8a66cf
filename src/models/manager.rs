//! Manager (staff account) model

use serde::{Deserialize, Serialize};

use super::Entity;

/// Staff account allowed to log into the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: i32,
    pub username: String,
    /// Stored and compared as plain text
    pub password: String,
    pub full_name: String,
}

impl Manager {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Entity for Manager {
    fn id(&self) -> i32 {
        self.id
    }
}
