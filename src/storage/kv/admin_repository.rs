//! # Administrator Repository
//!
//! Persistence for the administrator collection. The collection is a JSON
//! array under one key, read in full and written back in full, like every
//! other collection in the store.

use log::warn;

use crate::domain::models::admin::Administrator;
use crate::domain::models::record::round2;

use super::{KvConnection, ADMINISTRATORS_KEY};

/// Repository for administrator accounts.
#[derive(Clone)]
pub struct AdminRepository {
    connection: KvConnection,
}

impl AdminRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    /// Whether the administrator collection exists at all (seed check).
    pub fn is_seeded(&self) -> bool {
        self.connection.contains(ADMINISTRATORS_KEY)
    }

    /// Read the full administrator collection.
    pub fn list_admins(&self) -> Vec<Administrator> {
        self.connection.read(ADMINISTRATORS_KEY, Vec::new())
    }

    /// Look up an administrator by username.
    pub fn find_by_username(&self, username: &str) -> Option<Administrator> {
        self.list_admins()
            .into_iter()
            .find(|admin| admin.username == username)
    }

    /// Write the full administrator collection.
    pub fn save_admins(&self, admins: &[Administrator]) -> bool {
        self.connection.write(ADMINISTRATORS_KEY, &admins)
    }

    /// Add `amount` to the cumulative recycled total of `username`.
    ///
    /// Best-effort: a missing account is skipped with a warning, never an
    /// error, so a damaged admin collection can't block recording.
    pub fn add_to_recycled_total(&self, username: &str, amount: f64) {
        let mut admins = self.list_admins();
        match admins.iter_mut().find(|admin| admin.username == username) {
            Some(admin) => {
                admin.total_recycled_amount = round2(admin.total_recycled_amount + amount);
                self.save_admins(&admins);
            }
            None => {
                warn!(
                    "Administrator '{}' not found, skipping recycled total update",
                    username
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;
    use std::sync::Arc;

    fn setup_repo() -> AdminRepository {
        AdminRepository::new(KvConnection::new(Arc::new(MemoryBackend::new())))
    }

    fn sample_admin() -> Administrator {
        Administrator {
            username: "admin".to_string(),
            name: "Administrator".to_string(),
            email: "admin@example.com".to_string(),
            program: "Recycling Program".to_string(),
            password: "admin123".to_string(),
            role: "admin".to_string(),
            total_recycled_amount: 0.0,
        }
    }

    #[test]
    fn test_save_and_find() {
        let repo = setup_repo();
        assert!(!repo.is_seeded());
        assert!(repo.find_by_username("admin").is_none());

        assert!(repo.save_admins(&[sample_admin()]));
        assert!(repo.is_seeded());

        let found = repo.find_by_username("admin").unwrap();
        assert_eq!(found.role, "admin");
        assert!(repo.find_by_username("nobody").is_none());
    }

    #[test]
    fn test_add_to_recycled_total() {
        let repo = setup_repo();
        repo.save_admins(&[sample_admin()]);

        repo.add_to_recycled_total("admin", 40.0);
        repo.add_to_recycled_total("admin", 2.5);

        let admin = repo.find_by_username("admin").unwrap();
        assert_eq!(admin.total_recycled_amount, 42.5);
    }

    #[test]
    fn test_add_to_recycled_total_missing_admin_is_noop() {
        let repo = setup_repo();
        repo.save_admins(&[sample_admin()]);

        repo.add_to_recycled_total("ghost", 10.0);

        let admin = repo.find_by_username("admin").unwrap();
        assert_eq!(admin.total_recycled_amount, 0.0);
    }
}
