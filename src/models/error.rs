//! Error type shared by the store and logic operations.

use crate::models::fixture::MatchNo;
use crate::models::reference::{PlayerId, TeamId, TournamentId, VenueId};

/// Classification of an error, used by the web layer to pick a status code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Referenced entity or target row absent.
    NotFound,
    /// Malformed or inconsistent input.
    InvalidInput,
    /// Duplicate key on create.
    Conflict,
    /// Store failure during a multi-write sequence; all writes rolled back.
    TransactionFailed,
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    TournamentNotFound(TournamentId),
    TeamNotFound(TeamId),
    PlayerNotFound(PlayerId),
    VenueNotFound(VenueId),
    /// No scheduled match under (match_no, tr_id).
    FixtureNotFound {
        tr_id: TournamentId,
        match_no: MatchNo,
    },
    /// No played match under (match_no, tr_id).
    MatchNotFound {
        tr_id: TournamentId,
        match_no: MatchNo,
    },
    DuplicateTournament(TournamentId),
    DuplicateTeam(TeamId),
    DuplicatePlayer(PlayerId),
    DuplicateVenue(VenueId),
    /// A match with this number already exists in this tournament,
    /// in the scheduled or the played store.
    DuplicateMatchNo {
        tr_id: TournamentId,
        match_no: MatchNo,
    },
    TeamAlreadyRegistered {
        team_id: TeamId,
        tr_id: TournamentId,
    },
    PlayerAlreadyOnTeam {
        player_id: PlayerId,
        team_id: TeamId,
    },
    /// Team is not registered in the tournament.
    TeamNotRegistered(TeamId),
    /// Player of the match must come from one of the two playing teams.
    PlayerNotOnTeams(PlayerId),
    /// Player is not on this team in this tournament.
    PlayerNotOnTeam(PlayerId),
    /// A match needs two distinct teams.
    SameTeams(TeamId),
    /// goal_score does not parse as "A-B" with non-negative integers.
    BadGoalScore(String),
    /// Username already taken by another account.
    UsernameTaken(String),
    /// University id already bound to another account.
    KfupmIdTaken(i32),
    /// Unknown user or wrong password; deliberately indistinguishable.
    InvalidCredentials,
    /// A write inside a multi-statement sequence failed; the store was
    /// rolled back to its state before the sequence started.
    TransactionFailed(String),
}

impl TournamentError {
    /// Taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            TournamentNotFound(_) | TeamNotFound(_) | PlayerNotFound(_) | VenueNotFound(_)
            | FixtureNotFound { .. } | MatchNotFound { .. } | PlayerNotOnTeam(_) => {
                ErrorKind::NotFound
            }
            TeamNotRegistered(_) | PlayerNotOnTeams(_) | SameTeams(_) | BadGoalScore(_)
            | InvalidCredentials => ErrorKind::InvalidInput,
            DuplicateTournament(_) | DuplicateTeam(_) | DuplicatePlayer(_) | DuplicateVenue(_)
            | DuplicateMatchNo { .. } | TeamAlreadyRegistered { .. }
            | PlayerAlreadyOnTeam { .. } | UsernameTaken(_) | KfupmIdTaken(_) => {
                ErrorKind::Conflict
            }
            TransactionFailed(_) => ErrorKind::TransactionFailed,
        }
    }
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::TournamentNotFound(_) => write!(f, "Tournament not found"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::VenueNotFound(_) => write!(f, "Venue not found"),
            TournamentError::FixtureNotFound { .. } => write!(f, "Next match not found"),
            TournamentError::MatchNotFound { .. } => write!(f, "Match not found"),
            TournamentError::DuplicateTournament(_) => {
                write!(f, "A tournament with this ID already exists")
            }
            TournamentError::DuplicateTeam(_) => write!(f, "A team with this ID already exists"),
            TournamentError::DuplicatePlayer(_) => {
                write!(f, "A player with this ID already exists")
            }
            TournamentError::DuplicateVenue(_) => write!(f, "A venue with this ID already exists"),
            TournamentError::DuplicateMatchNo { .. } => {
                write!(f, "A match with this number already exists in this tournament")
            }
            TournamentError::TeamAlreadyRegistered { .. } => {
                write!(f, "This team is already registered for this tournament")
            }
            TournamentError::PlayerAlreadyOnTeam { .. } => {
                write!(f, "Player is already in this team for this tournament")
            }
            TournamentError::TeamNotRegistered(_) => {
                write!(f, "Both teams must be registered in this tournament")
            }
            TournamentError::PlayerNotOnTeams(_) => {
                write!(f, "Player of match must be from one of the playing teams")
            }
            TournamentError::PlayerNotOnTeam(_) => {
                write!(f, "Player not found in this team for this tournament")
            }
            TournamentError::SameTeams(_) => write!(f, "A match needs two different teams"),
            TournamentError::BadGoalScore(s) => {
                write!(f, "Goal score {s:?} is not of the form \"A-B\"")
            }
            TournamentError::UsernameTaken(name) => {
                write!(f, "Username {name:?} already exists")
            }
            TournamentError::KfupmIdTaken(id) => write!(f, "User with ID {id} already exists"),
            TournamentError::InvalidCredentials => write!(f, "Invalid credentials"),
            TournamentError::TransactionFailed(cause) => {
                write!(f, "Transaction failed and was rolled back: {cause}")
            }
        }
    }
}
