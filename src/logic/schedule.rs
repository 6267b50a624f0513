//! Fixture administration: create, update and delete scheduled matches.

use crate::models::{
    MatchKey, MatchNo, ScheduledMatch, ScheduledMatchFields, TeamId, TournamentError,
    TournamentId, VenueId,
};
use crate::store::{MatchStore, ReferenceStore};

/// Referential checks shared by fixture and played-match writes: the
/// tournament and venue must exist, and the two teams must be distinct
/// and registered in the tournament.
pub(crate) fn check_match_refs(
    refs: &ReferenceStore,
    tr_id: TournamentId,
    team_id1: TeamId,
    team_id2: TeamId,
    venue_id: VenueId,
) -> Result<(), TournamentError> {
    if !refs.tournament_exists(tr_id) {
        return Err(TournamentError::TournamentNotFound(tr_id));
    }
    if team_id1 == team_id2 {
        return Err(TournamentError::SameTeams(team_id1));
    }
    if !refs.venue_exists(venue_id) {
        return Err(TournamentError::VenueNotFound(venue_id));
    }
    for team in [team_id1, team_id2] {
        if !refs.team_registered(team, tr_id) {
            return Err(TournamentError::TeamNotRegistered(team));
        }
    }
    Ok(())
}

/// Schedule a new fixture.
pub fn create_scheduled(
    refs: &ReferenceStore,
    matches: &mut MatchStore,
    tr_id: TournamentId,
    match_no: MatchNo,
    fields: ScheduledMatchFields,
) -> Result<ScheduledMatch, TournamentError> {
    check_match_refs(refs, tr_id, fields.team_id1, fields.team_id2, fields.venue_id)?;
    let row = fields.into_match(tr_id, match_no);
    matches.insert_scheduled(row.clone())?;
    Ok(row)
}

/// Replace the mutable fields of a fixture. Identity never changes.
pub fn update_scheduled(
    refs: &ReferenceStore,
    matches: &mut MatchStore,
    tr_id: TournamentId,
    match_no: MatchNo,
    fields: ScheduledMatchFields,
) -> Result<ScheduledMatch, TournamentError> {
    let key = MatchKey { tr_id, match_no };
    if matches.scheduled(&key).is_none() {
        return Err(TournamentError::FixtureNotFound { tr_id, match_no });
    }
    check_match_refs(refs, tr_id, fields.team_id1, fields.team_id2, fields.venue_id)?;
    let row = fields.into_match(tr_id, match_no);
    matches.replace_scheduled(row.clone())?;
    Ok(row)
}

/// Delete a fixture, returning the deleted row.
pub fn delete_scheduled(
    matches: &mut MatchStore,
    tr_id: TournamentId,
    match_no: MatchNo,
) -> Result<ScheduledMatch, TournamentError> {
    matches
        .remove_scheduled(&MatchKey { tr_id, match_no })
        .ok_or(TournamentError::FixtureNotFound { tr_id, match_no })
}
