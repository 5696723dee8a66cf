//! Manager domain methods on Library

use super::{next_id, Library};
use crate::{config::AdminConfig, error::AppResult, models::Manager};

impl Library {
    /// First manager whose username and password both match exactly
    pub fn login(&self, username: &str, password: &str) -> Option<&Manager> {
        let manager = self.managers.iter().find(|m| m.matches(username, password));
        match manager {
            Some(m) => tracing::info!("Manager {} logged in", m.username),
            None => tracing::warn!("Failed login attempt for {:?}", username),
        }
        manager
    }

    pub(super) fn seed_manager(&mut self, admin: &AdminConfig) -> AppResult<()> {
        let manager = Manager {
            id: next_id(&self.managers)?,
            username: admin.username.clone(),
            password: admin.password.clone(),
            full_name: admin.full_name.clone(),
        };
        tracing::info!("No managers found, seeding default account {}", manager.username);
        self.managers.push(manager);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::open_temp;
    use super::*;
    use crate::{config::SavePolicy, repository::JsonStore};

    #[test]
    fn test_login_exact_match() {
        let (_dir, library) = open_temp();
        let manager = library.login("admin", "admin123").expect("admin");
        assert_eq!(manager.full_name, "Administrator");
        assert_eq!(manager.id, 1);

        assert!(library.login("admin", "wrong").is_none());
        assert!(library.login("ADMIN", "admin123").is_none());
        assert!(library.login("admin", "admin123 ").is_none());
    }

    #[test]
    fn test_seed_only_when_empty() {
        let (dir, library) = open_temp();
        drop(library);

        let admin = AdminConfig {
            username: "root".to_string(),
            password: "secret".to_string(),
            full_name: "Root".to_string(),
        };
        let reopened = Library::open(JsonStore::new(dir.path()), SavePolicy::Propagate, &admin)
            .expect("reopen");
        assert!(reopened.login("admin", "admin123").is_some());
        assert!(reopened.login("root", "secret").is_none());
    }
}
