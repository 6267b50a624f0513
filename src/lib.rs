//! University soccer tournament manager: library with models, stores and
//! business logic. Administrators register tournaments, teams, players and
//! venues, schedule fixtures and record results; guests browse schedules
//! and results.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    approve_player, create_played, create_player, create_scheduled, create_team,
    create_tournament, create_venue, delete_played, delete_scheduled, delete_tournament,
    list_tournaments, log_in, played_match_views, register_team, scheduled_match_views, sign_up,
    team_roster, transition_to_played, update_played, update_scheduled, NewAccount,
    PlayedMatchView, RosterEntryView, ScheduledMatchView, TournamentSummary,
};
pub use models::{
    DecidedBy, ErrorKind, GoalScore, MatchDetail, MatchKey, MatchNo, MatchOutcome, MatchResult,
    PlayStage, PlayedMatch, PlayedMatchFields, Player, PlayerId, Role, RosterSpot, ScheduledMatch,
    ScheduledMatchFields, Team, TeamEntry, TeamId, TeamOutcome, Tournament, TournamentError,
    TournamentId, UserAccount, Venue, VenueId, WinLose,
};
pub use store::{load_reference_dir, AccountStore, League, MatchStore, ReferenceStore, SeedReport};
