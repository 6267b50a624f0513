//! Data structures for the soccer tournament: reference entities, fixtures,
//! played matches, accounts.

mod account;
mod error;
mod fixture;
mod played;
mod reference;

pub use account::{Role, UserAccount};
pub use error::{ErrorKind, TournamentError};
pub use fixture::{MatchKey, MatchNo, PlayStage, ScheduledMatch, ScheduledMatchFields};
pub use played::{
    DecidedBy, GoalScore, MatchDetail, MatchOutcome, MatchResult, PlayedMatch, PlayedMatchFields,
    TeamOutcome, WinLose,
};
pub use reference::{
    Player, PlayerId, RosterSpot, Team, TeamEntry, TeamId, Tournament, TournamentId, Venue, VenueId,
};
