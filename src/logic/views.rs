//! Name-joined read views backing the guest and admin listing pages.
//! Names resolve to `None` when the referenced entity is gone, the same
//! shape a LEFT JOIN would produce.

use crate::models::{
    DecidedBy, GoalScore, MatchNo, MatchResult, PlayStage, PlayerId, TeamId, TournamentId, VenueId,
};
use crate::store::{MatchStore, ReferenceStore};
use chrono::NaiveDate;
use serde::Serialize;

/// Tournament line for the selection list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TournamentSummary {
    pub tr_id: TournamentId,
    pub tr_name: String,
}

/// Upcoming match with display names resolved.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ScheduledMatchView {
    pub match_no: MatchNo,
    pub tr_id: TournamentId,
    pub play_date: NaiveDate,
    pub play_stage: PlayStage,
    pub venue_id: VenueId,
    pub venue_name: Option<String>,
    pub team_id1: TeamId,
    pub team_id2: TeamId,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
}

/// Played match with display names resolved.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayedMatchView {
    pub match_no: MatchNo,
    pub tr_id: TournamentId,
    pub play_stage: PlayStage,
    pub play_date: NaiveDate,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub results: MatchResult,
    pub decided_by: DecidedBy,
    pub goal_score: GoalScore,
    pub venue_name: Option<String>,
    pub audience: u32,
    pub player_of_match: PlayerId,
    pub player_of_match_name: Option<String>,
    pub stop1_sec: Option<u32>,
    pub stop2_sec: Option<u32>,
}

/// Roster line for the team members page.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RosterEntryView {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub jersey_no: Option<u32>,
    pub position: Option<String>,
    pub is_captain: bool,
}

/// All tournaments, ordered by name.
pub fn list_tournaments(refs: &ReferenceStore) -> Vec<TournamentSummary> {
    let mut rows: Vec<TournamentSummary> = refs
        .tournaments()
        .map(|t| TournamentSummary {
            tr_id: t.tr_id,
            tr_name: t.tr_name.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.tr_name.cmp(&b.tr_name).then(a.tr_id.cmp(&b.tr_id)));
    rows
}

/// Upcoming matches of a tournament, ordered by play date.
pub fn scheduled_match_views(
    refs: &ReferenceStore,
    matches: &MatchStore,
    tr_id: TournamentId,
) -> Vec<ScheduledMatchView> {
    let mut rows: Vec<ScheduledMatchView> = matches
        .scheduled_in(tr_id)
        .map(|m| ScheduledMatchView {
            match_no: m.match_no,
            tr_id: m.tr_id,
            play_date: m.play_date,
            play_stage: m.play_stage,
            venue_id: m.venue_id,
            venue_name: refs.venue(m.venue_id).map(|v| v.venue_name.clone()),
            team_id1: m.team_id1,
            team_id2: m.team_id2,
            team1_name: refs.team(m.team_id1).map(|t| t.team_name.clone()),
            team2_name: refs.team(m.team_id2).map(|t| t.team_name.clone()),
        })
        .collect();
    rows.sort_by_key(|m| (m.play_date, m.match_no));
    rows
}

/// Results of a tournament, ordered by play date.
pub fn played_match_views(
    refs: &ReferenceStore,
    matches: &MatchStore,
    tr_id: TournamentId,
) -> Vec<PlayedMatchView> {
    let mut rows: Vec<PlayedMatchView> = matches
        .played_in(tr_id)
        .map(|m| PlayedMatchView {
            match_no: m.match_no,
            tr_id: m.tr_id,
            play_stage: m.play_stage,
            play_date: m.play_date,
            team1_name: refs.team(m.team_id1).map(|t| t.team_name.clone()),
            team2_name: refs.team(m.team_id2).map(|t| t.team_name.clone()),
            results: m.results,
            decided_by: m.decided_by,
            goal_score: m.goal_score,
            venue_name: refs.venue(m.venue_id).map(|v| v.venue_name.clone()),
            audience: m.audience,
            player_of_match: m.player_of_match,
            player_of_match_name: refs.player(m.player_of_match).map(|p| p.name.clone()),
            stop1_sec: m.stop1_sec,
            stop2_sec: m.stop2_sec,
        })
        .collect();
    rows.sort_by_key(|m| (m.play_date, m.match_no));
    rows
}

/// Players on a team's roster in a tournament, ordered by jersey number.
pub fn team_roster(
    refs: &ReferenceStore,
    tr_id: TournamentId,
    team_id: TeamId,
) -> Vec<RosterEntryView> {
    let mut rows: Vec<RosterEntryView> = refs
        .roster_of(tr_id, team_id)
        .map(|spot| {
            let player = refs.player(spot.player_id);
            RosterEntryView {
                player_id: spot.player_id,
                name: player.map(|p| p.name.clone()),
                jersey_no: player.map(|p| p.jersey_no),
                position: player.map(|p| p.position.clone()),
                is_captain: spot.is_captain,
            }
        })
        .collect();
    rows.sort_by_key(|r| (r.jersey_no, r.player_id));
    rows
}
