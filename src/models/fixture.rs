//! Scheduled (not yet played) matches and the composite match identity.

use crate::models::reference::{TeamId, TournamentId, VenueId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Match number; unique together with the tournament id.
pub type MatchNo = i32;

/// Composite identity shared by the scheduled and played stores.
/// A key is present in at most one of the two stores at any time.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MatchKey {
    pub tr_id: TournamentId,
    pub match_no: MatchNo,
}

/// Phase of the tournament a match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayStage {
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "round-of-16")]
    RoundOf16,
    #[serde(rename = "quarter-final")]
    QuarterFinal,
    #[serde(rename = "semi-final")]
    SemiFinal,
    #[serde(rename = "final")]
    Final,
}

/// A fixture: a match that is scheduled but not yet played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub match_no: MatchNo,
    pub tr_id: TournamentId,
    pub play_date: NaiveDate,
    pub play_stage: PlayStage,
    pub venue_id: VenueId,
    pub team_id1: TeamId,
    pub team_id2: TeamId,
}

impl ScheduledMatch {
    pub fn key(&self) -> MatchKey {
        MatchKey {
            tr_id: self.tr_id,
            match_no: self.match_no,
        }
    }
}

/// Mutable fields of a fixture, as supplied on create and update.
/// Identity (match number and tournament) comes from the request path.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatchFields {
    pub play_date: NaiveDate,
    pub play_stage: PlayStage,
    pub venue_id: VenueId,
    pub team_id1: TeamId,
    pub team_id2: TeamId,
}

impl ScheduledMatchFields {
    /// Attach identity to form a full fixture row.
    pub fn into_match(self, tr_id: TournamentId, match_no: MatchNo) -> ScheduledMatch {
        ScheduledMatch {
            match_no,
            tr_id,
            play_date: self.play_date,
            play_stage: self.play_stage,
            venue_id: self.venue_id,
            team_id1: self.team_id1,
            team_id2: self.team_id2,
        }
    }
}
