//! User accounts, keyed by username.

use crate::models::{TournamentError, UserAccount};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<String, UserAccount>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_username(&self, username: &str) -> Option<&UserAccount> {
        self.accounts.get(username)
    }

    /// Insert a new account. Usernames and university ids are both unique.
    pub fn insert(&mut self, account: UserAccount) -> Result<(), TournamentError> {
        if self.accounts.contains_key(&account.username) {
            return Err(TournamentError::UsernameTaken(account.username));
        }
        if self.accounts.values().any(|a| a.kfupm_id == account.kfupm_id) {
            return Err(TournamentError::KfupmIdTaken(account.kfupm_id));
        }
        self.accounts.insert(account.username.clone(), account);
        Ok(())
    }
}
