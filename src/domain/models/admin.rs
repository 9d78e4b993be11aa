//! Domain model for an administrator account.

use serde::{Deserialize, Serialize};

/// An administrator of the recycling program.
///
/// Created once by seeding. The password is stored plaintext and compared
/// by exact match; only `total_recycled_amount` mutates afterwards, bumped
/// on every recorded transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Administrator {
    /// Unique login name.
    pub username: String,
    pub name: String,
    pub email: String,
    pub program: String,
    pub password: String,
    pub role: String,
    /// Running monetary total of everything recycled under this account.
    pub total_recycled_amount: f64,
}
