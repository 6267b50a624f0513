//! Direct administration of played matches, outside the transition path.

use crate::logic::schedule::check_match_refs;
use crate::models::{
    MatchKey, MatchNo, PlayedMatch, PlayedMatchFields, TournamentError, TournamentId,
};
use crate::store::{MatchStore, ReferenceStore};

fn check_player_of_match(
    refs: &ReferenceStore,
    tr_id: TournamentId,
    fields: &PlayedMatchFields,
) -> Result<(), TournamentError> {
    let player = fields.player_of_match;
    if !refs.player_on_team(player, fields.team_id1, tr_id)
        && !refs.player_on_team(player, fields.team_id2, tr_id)
    {
        return Err(TournamentError::PlayerNotOnTeams(player));
    }
    Ok(())
}

/// Record a played match directly (administrative correction path).
/// Does not create detail rows; those belong to the transition.
pub fn create_played(
    refs: &ReferenceStore,
    matches: &mut MatchStore,
    tr_id: TournamentId,
    match_no: MatchNo,
    fields: PlayedMatchFields,
) -> Result<PlayedMatch, TournamentError> {
    check_match_refs(refs, tr_id, fields.team_id1, fields.team_id2, fields.venue_id)?;
    check_player_of_match(refs, tr_id, &fields)?;
    let row = fields.into_match(tr_id, match_no);
    matches.insert_played(row.clone())?;
    Ok(row)
}

/// Replace the mutable fields of a played match. Identity never changes.
pub fn update_played(
    refs: &ReferenceStore,
    matches: &mut MatchStore,
    tr_id: TournamentId,
    match_no: MatchNo,
    fields: PlayedMatchFields,
) -> Result<PlayedMatch, TournamentError> {
    let key = MatchKey { tr_id, match_no };
    if matches.played(&key).is_none() {
        return Err(TournamentError::MatchNotFound { tr_id, match_no });
    }
    check_match_refs(refs, tr_id, fields.team_id1, fields.team_id2, fields.venue_id)?;
    check_player_of_match(refs, tr_id, &fields)?;
    let row = fields.into_match(tr_id, match_no);
    matches.replace_played(row.clone())?;
    Ok(row)
}

/// Delete a played match (and its detail rows), returning the deleted row.
pub fn delete_played(
    matches: &mut MatchStore,
    tr_id: TournamentId,
    match_no: MatchNo,
) -> Result<PlayedMatch, TournamentError> {
    matches
        .remove_played(&MatchKey { tr_id, match_no })
        .ok_or(TournamentError::MatchNotFound { tr_id, match_no })
}
