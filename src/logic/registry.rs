//! Reference-data administration: tournaments, teams, players, venues,
//! team registration and rosters.

use crate::models::{
    Player, PlayerId, RosterSpot, Team, TeamEntry, TeamId, Tournament, TournamentError,
    TournamentId, Venue,
};
use crate::store::{MatchStore, ReferenceStore};

pub fn create_tournament(
    refs: &mut ReferenceStore,
    tournament: Tournament,
) -> Result<Tournament, TournamentError> {
    refs.insert_tournament(tournament.clone())?;
    Ok(tournament)
}

/// Delete a tournament and everything hanging off it: registrations,
/// roster spots, fixtures, played matches and their detail rows.
pub fn delete_tournament(
    refs: &mut ReferenceStore,
    matches: &mut MatchStore,
    tr_id: TournamentId,
) -> Result<Tournament, TournamentError> {
    let tournament = refs
        .remove_tournament(tr_id)
        .ok_or(TournamentError::TournamentNotFound(tr_id))?;
    matches.purge_tournament(tr_id);
    Ok(tournament)
}

pub fn create_team(refs: &mut ReferenceStore, team: Team) -> Result<Team, TournamentError> {
    refs.insert_team(team.clone())?;
    Ok(team)
}

pub fn create_player(refs: &mut ReferenceStore, player: Player) -> Result<Player, TournamentError> {
    refs.insert_player(player.clone())?;
    Ok(player)
}

pub fn create_venue(refs: &mut ReferenceStore, venue: Venue) -> Result<Venue, TournamentError> {
    refs.insert_venue(venue.clone())?;
    Ok(venue)
}

/// Register a team in a tournament.
pub fn register_team(
    refs: &mut ReferenceStore,
    tr_id: TournamentId,
    team_id: TeamId,
    team_group: String,
) -> Result<TeamEntry, TournamentError> {
    if !refs.team_exists(team_id) {
        return Err(TournamentError::TeamNotFound(team_id));
    }
    if !refs.tournament_exists(tr_id) {
        return Err(TournamentError::TournamentNotFound(tr_id));
    }
    let entry = TeamEntry {
        team_id,
        tr_id,
        team_group,
    };
    refs.insert_entry(entry.clone())?;
    Ok(entry)
}

/// Approve a player onto a team's roster for a tournament.
pub fn approve_player(
    refs: &mut ReferenceStore,
    tr_id: TournamentId,
    team_id: TeamId,
    player_id: PlayerId,
) -> Result<RosterSpot, TournamentError> {
    if !refs.player_exists(player_id) {
        return Err(TournamentError::PlayerNotFound(player_id));
    }
    if !refs.team_exists(team_id) {
        return Err(TournamentError::TeamNotFound(team_id));
    }
    if !refs.tournament_exists(tr_id) {
        return Err(TournamentError::TournamentNotFound(tr_id));
    }
    if !refs.team_registered(team_id, tr_id) {
        return Err(TournamentError::TeamNotRegistered(team_id));
    }
    let spot = RosterSpot {
        player_id,
        team_id,
        tr_id,
        is_captain: false,
    };
    refs.insert_roster_spot(spot.clone())?;
    Ok(spot)
}
