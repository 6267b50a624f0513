//! Account management: signup, login, password digests.

use crate::models::{Role, TournamentError, UserAccount};
use crate::store::AccountStore;
use chrono::NaiveDate;
use rand::Rng;
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Input for creating an account.
#[derive(Clone, Debug, Deserialize)]
pub struct NewAccount {
    pub kfupm_id: i32,
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    let hex: String = hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    format!("{salt}${hex}")
}

/// Salted digest in "salt$sha256hex" form, with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt: String = rand::thread_rng()
        .gen::<[u8; 16]>()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    digest_password(&salt, password)
}

/// Check a password against a stored "salt$sha256hex" digest.
pub fn verify_password(stored: &str, password: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, _)) => digest_password(salt, password) == stored,
        None => false,
    }
}

/// Register a new account with the given role.
pub fn sign_up(
    accounts: &mut AccountStore,
    new: NewAccount,
    role: Role,
) -> Result<UserAccount, TournamentError> {
    let account = UserAccount {
        kfupm_id: new.kfupm_id,
        username: new.username,
        password_digest: hash_password(&new.password),
        full_name: new.full_name,
        date_of_birth: new.date_of_birth,
        role,
    };
    accounts.insert(account.clone())?;
    Ok(account)
}

/// Check credentials. The same error covers unknown users and wrong
/// passwords so the response does not leak which usernames exist.
pub fn log_in<'a>(
    accounts: &'a AccountStore,
    username: &str,
    password: &str,
) -> Result<&'a UserAccount, TournamentError> {
    let account = accounts
        .by_username(username)
        .ok_or(TournamentError::InvalidCredentials)?;
    if !verify_password(&account.password_digest, password) {
        return Err(TournamentError::InvalidCredentials);
    }
    Ok(account)
}
