//! Reference entities: tournaments, teams, players, venues, and the
//! relations tying teams and players to a tournament.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a tournament.
pub type TournamentId = i32;
/// Unique identifier for a team.
pub type TeamId = i32;
/// Unique identifier for a player (the person's university id).
pub type PlayerId = i32;
/// Unique identifier for a venue.
pub type VenueId = i32;

/// A tournament: identity, name, and the dates it runs between.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub tr_id: TournamentId,
    pub tr_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
}

/// A player: person data plus squad details.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub jersey_no: u32,
    pub position: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub capacity: u32,
}

/// Registration of a team in a tournament, with its group letter.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub team_id: TeamId,
    pub tr_id: TournamentId,
    pub team_group: String,
}

/// Membership of a player on a team within one tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterSpot {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub tr_id: TournamentId,
    pub is_captain: bool,
}
