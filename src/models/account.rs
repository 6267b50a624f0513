//! User accounts for the session-authenticated admin surface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Access level of a logged-in user.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Guest,
}

/// A registered user account. The password digest is "salt$sha256hex"
/// and is never serialized into responses.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UserAccount {
    pub kfupm_id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_digest: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub role: Role,
}
