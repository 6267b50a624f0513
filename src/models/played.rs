//! Played matches: results, per-team detail rows, and the outcome input
//! for moving a fixture to the played store.

use crate::models::error::TournamentError;
use crate::models::fixture::{MatchKey, MatchNo, PlayStage};
use crate::models::reference::{PlayerId, TeamId, TournamentId, VenueId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Final result of a match. Always derived from the goal score.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "team1-won")]
    Team1Won,
    #[serde(rename = "team2-won")]
    Team2Won,
    #[serde(rename = "draw")]
    Draw,
}

/// Whether the outcome was settled in normal time or on penalties.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DecidedBy {
    #[serde(rename = "normal-time")]
    NormalTime,
    #[serde(rename = "penalty")]
    Penalty,
}

/// One team's view of a result (win/lose/draw).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum WinLose {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Lose,
    #[serde(rename = "D")]
    Draw,
}

/// Validated "A-B" goal score. Parsing is the only way to build one from
/// text, so a stored score is always two non-negative integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GoalScore {
    pub team1: u32,
    pub team2: u32,
}

impl GoalScore {
    pub fn new(team1: u32, team2: u32) -> Self {
        Self { team1, team2 }
    }

    /// Derive the match result from the goals. This derivation is
    /// authoritative; callers never supply a result of their own.
    pub fn result(&self) -> MatchResult {
        if self.team1 > self.team2 {
            MatchResult::Team1Won
        } else if self.team1 < self.team2 {
            MatchResult::Team2Won
        } else {
            MatchResult::Draw
        }
    }
}

impl FromStr for GoalScore {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TournamentError::BadGoalScore(s.to_string());
        let (a, b) = s.split_once('-').ok_or_else(bad)?;
        let team1 = a.trim().parse::<u32>().map_err(|_| bad())?;
        let team2 = b.trim().parse::<u32>().map_err(|_| bad())?;
        Ok(Self { team1, team2 })
    }
}

impl fmt::Display for GoalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.team1, self.team2)
    }
}

impl TryFrom<String> for GoalScore {
    type Error = TournamentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GoalScore> for String {
    fn from(score: GoalScore) -> Self {
        score.to_string()
    }
}

/// A finalized match result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayedMatch {
    pub match_no: MatchNo,
    pub tr_id: TournamentId,
    pub play_stage: PlayStage,
    pub play_date: NaiveDate,
    pub team_id1: TeamId,
    pub team_id2: TeamId,
    pub results: MatchResult,
    pub decided_by: DecidedBy,
    pub goal_score: GoalScore,
    pub venue_id: VenueId,
    pub audience: u32,
    pub player_of_match: PlayerId,
    /// First-half stoppage time in seconds, if recorded.
    pub stop1_sec: Option<u32>,
    /// Second-half stoppage time in seconds, if recorded.
    pub stop2_sec: Option<u32>,
}

impl PlayedMatch {
    pub fn key(&self) -> MatchKey {
        MatchKey {
            tr_id: self.tr_id,
            match_no: self.match_no,
        }
    }
}

/// One team's breakdown of a played match. Exactly two rows exist per
/// transitioned match, one per side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub match_no: MatchNo,
    pub tr_id: TournamentId,
    pub team_id: TeamId,
    pub win_lose: WinLose,
    pub decided_by: DecidedBy,
    /// This team's goals (one side of the match's goal score).
    pub goal_score: u32,
    pub penalty_score: Option<u32>,
    /// Goalkeeper fielded by this team.
    pub player_gk: PlayerId,
}

/// Mutable fields of a played match, as supplied on direct create and
/// update. Identity comes from the request path.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayedMatchFields {
    pub play_stage: PlayStage,
    pub play_date: NaiveDate,
    pub team_id1: TeamId,
    pub team_id2: TeamId,
    pub results: MatchResult,
    pub decided_by: DecidedBy,
    pub goal_score: GoalScore,
    pub venue_id: VenueId,
    pub audience: u32,
    pub player_of_match: PlayerId,
    #[serde(default)]
    pub stop1_sec: Option<u32>,
    #[serde(default)]
    pub stop2_sec: Option<u32>,
}

impl PlayedMatchFields {
    /// Attach identity to form a full played-match row.
    pub fn into_match(self, tr_id: TournamentId, match_no: MatchNo) -> PlayedMatch {
        PlayedMatch {
            match_no,
            tr_id,
            play_stage: self.play_stage,
            play_date: self.play_date,
            team_id1: self.team_id1,
            team_id2: self.team_id2,
            results: self.results,
            decided_by: self.decided_by,
            goal_score: self.goal_score,
            venue_id: self.venue_id,
            audience: self.audience,
            player_of_match: self.player_of_match,
            stop1_sec: self.stop1_sec,
            stop2_sec: self.stop2_sec,
        }
    }
}

/// Input for moving a fixture to the played store: everything the admin
/// records at full time. The match result itself is not part of the
/// outcome; it is derived from `goal_score`.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct MatchOutcome {
    pub decided_by: DecidedBy,
    pub goal_score: GoalScore,
    pub venue_id: VenueId,
    pub audience: u32,
    pub player_of_match: PlayerId,
    #[serde(default)]
    pub stop1_sec: Option<u32>,
    #[serde(default)]
    pub stop2_sec: Option<u32>,
    pub team1: TeamOutcome,
    pub team2: TeamOutcome,
}

/// Per-team outcome fields recorded alongside the match.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct TeamOutcome {
    pub win_lose: WinLose,
    #[serde(default)]
    pub penalty_score: Option<u32>,
    pub player_gk: PlayerId,
}
