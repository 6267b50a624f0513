//! Match lifecycle transition: move a fixture to the played store.

use crate::models::{
    MatchDetail, MatchKey, MatchNo, MatchOutcome, PlayedMatch, TeamId, TeamOutcome,
    TournamentError, TournamentId,
};
use crate::store::MatchStore;

/// Move the fixture `(match_no, tr_id)` to the played store.
///
/// Reads the fixture, derives the result from the goal score, then runs
/// one store transaction that writes the played row plus one detail row
/// per side and removes the fixture. On any error nothing has changed and
/// the call may be retried.
///
/// The recorded venue comes from the outcome, so a late venue change can
/// be captured at record time. Stage, date and the two teams always come
/// from the fixture.
pub fn transition_to_played(
    matches: &mut MatchStore,
    tr_id: TournamentId,
    match_no: MatchNo,
    outcome: &MatchOutcome,
) -> Result<PlayedMatch, TournamentError> {
    let key = MatchKey { tr_id, match_no };
    let fixture = matches
        .scheduled(&key)
        .cloned()
        .ok_or(TournamentError::FixtureNotFound { tr_id, match_no })?;

    let goals = outcome.goal_score;
    let played = PlayedMatch {
        match_no: fixture.match_no,
        tr_id: fixture.tr_id,
        play_stage: fixture.play_stage,
        play_date: fixture.play_date,
        team_id1: fixture.team_id1,
        team_id2: fixture.team_id2,
        results: goals.result(),
        decided_by: outcome.decided_by,
        goal_score: goals,
        venue_id: outcome.venue_id,
        audience: outcome.audience,
        player_of_match: outcome.player_of_match,
        stop1_sec: outcome.stop1_sec,
        stop2_sec: outcome.stop2_sec,
    };
    let details = [
        detail_row(&played, fixture.team_id1, goals.team1, &outcome.team1),
        detail_row(&played, fixture.team_id2, goals.team2, &outcome.team2),
    ];

    matches.transaction(|tx| {
        tx.insert_played(played.clone())?;
        for d in &details {
            tx.insert_detail(d.clone())?;
        }
        // The fixture was read outside the transaction; the delete must
        // still affect a row for the sequence to commit.
        if tx.remove_scheduled(&key).is_none() {
            return Err(TournamentError::TransactionFailed(format!(
                "fixture {tr_id}/{match_no} disappeared mid-transition"
            )));
        }
        Ok(())
    })?;

    Ok(played)
}

fn detail_row(
    played: &PlayedMatch,
    team_id: TeamId,
    goals: u32,
    side: &TeamOutcome,
) -> MatchDetail {
    MatchDetail {
        match_no: played.match_no,
        tr_id: played.tr_id,
        team_id,
        win_lose: side.win_lose,
        decided_by: played.decided_by,
        goal_score: goals,
        penalty_score: side.penalty_score,
        player_gk: side.player_gk,
    }
}
