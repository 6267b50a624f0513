//! Business logic: the match lifecycle transition, CRUD surfaces for both
//! match stores, reference-data registry, accounts, and read views.

mod accounts;
mod registry;
mod results;
mod schedule;
mod transition;
mod views;

pub use accounts::{hash_password, log_in, sign_up, verify_password, NewAccount};
pub use registry::{
    approve_player, create_player, create_team, create_tournament, create_venue,
    delete_tournament, register_team,
};
pub use results::{create_played, delete_played, update_played};
pub use schedule::{create_scheduled, delete_scheduled, update_scheduled};
pub use transition::transition_to_played;
pub use views::{
    list_tournaments, played_match_views, scheduled_match_views, team_roster, PlayedMatchView,
    RosterEntryView, ScheduledMatchView, TournamentSummary,
};
