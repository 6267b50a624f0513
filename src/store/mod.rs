//! In-memory stores: reference data, accounts, and the two match tables.

mod accounts;
mod matches;
mod reference;
mod seed;

pub use accounts::AccountStore;
pub use matches::MatchStore;
pub use reference::ReferenceStore;
pub use seed::{load_reference_dir, SeedReport};

/// Whole application state: everything a request handler may touch.
/// Lives behind one `RwLock` in the web layer; holding the write guard
/// is the scope of a unit of work.
#[derive(Clone, Debug, Default)]
pub struct League {
    pub accounts: AccountStore,
    pub refs: ReferenceStore,
    pub matches: MatchStore,
}
