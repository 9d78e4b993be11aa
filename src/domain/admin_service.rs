//! Administrator authentication check.

use log::info;

use crate::storage::kv::AdminRepository;

/// Service validating administrator credentials.
#[derive(Clone)]
pub struct AdminService {
    admin_repository: AdminRepository,
}

impl AdminService {
    pub fn new(admin_repository: AdminRepository) -> Self {
        Self { admin_repository }
    }

    /// Check a username/password pair against the stored administrators.
    ///
    /// Exact string comparison against the stored plaintext password, no
    /// hashing. Unknown usernames return false. Side-effect free.
    pub fn validate_admin(&self, username: &str, password: &str) -> bool {
        match self.admin_repository.find_by_username(username) {
            Some(admin) => {
                let valid = admin.password == password;
                if !valid {
                    info!("Password mismatch for administrator '{}'", username);
                }
                valid
            }
            None => {
                info!("Unknown administrator '{}'", username);
                false
            }
        }
    }
}
