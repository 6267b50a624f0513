//! Reference data: tournaments, teams, players, venues, and who plays where.

use crate::models::{
    Player, PlayerId, RosterSpot, Team, TeamEntry, TeamId, Tournament, TournamentError,
    TournamentId, Venue, VenueId,
};
use std::collections::HashMap;

/// Lookup store for the entities match operations reference. Match logic
/// only consumes the existence checks; the insert/remove operations back
/// the admin registry surface.
#[derive(Clone, Debug, Default)]
pub struct ReferenceStore {
    tournaments: HashMap<TournamentId, Tournament>,
    teams: HashMap<TeamId, Team>,
    players: HashMap<PlayerId, Player>,
    venues: HashMap<VenueId, Venue>,
    entries: HashMap<(TournamentId, TeamId), TeamEntry>,
    roster: HashMap<(TournamentId, TeamId, PlayerId), RosterSpot>,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tournament_exists(&self, id: TournamentId) -> bool {
        self.tournaments.contains_key(&id)
    }

    pub fn team_exists(&self, id: TeamId) -> bool {
        self.teams.contains_key(&id)
    }

    pub fn player_exists(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn venue_exists(&self, id: VenueId) -> bool {
        self.venues.contains_key(&id)
    }

    pub fn team_registered(&self, team_id: TeamId, tr_id: TournamentId) -> bool {
        self.entries.contains_key(&(tr_id, team_id))
    }

    pub fn player_on_team(&self, player_id: PlayerId, team_id: TeamId, tr_id: TournamentId) -> bool {
        self.roster.contains_key(&(tr_id, team_id, player_id))
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.get(&id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn venue(&self, id: VenueId) -> Option<&Venue> {
        self.venues.get(&id)
    }

    pub fn tournaments(&self) -> impl Iterator<Item = &Tournament> {
        self.tournaments.values()
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Roster spots of one team in one tournament.
    pub fn roster_of(
        &self,
        tr_id: TournamentId,
        team_id: TeamId,
    ) -> impl Iterator<Item = &RosterSpot> {
        self.roster
            .values()
            .filter(move |s| s.tr_id == tr_id && s.team_id == team_id)
    }

    pub fn insert_tournament(&mut self, t: Tournament) -> Result<(), TournamentError> {
        if self.tournaments.contains_key(&t.tr_id) {
            return Err(TournamentError::DuplicateTournament(t.tr_id));
        }
        self.tournaments.insert(t.tr_id, t);
        Ok(())
    }

    pub fn insert_team(&mut self, t: Team) -> Result<(), TournamentError> {
        if self.teams.contains_key(&t.team_id) {
            return Err(TournamentError::DuplicateTeam(t.team_id));
        }
        self.teams.insert(t.team_id, t);
        Ok(())
    }

    pub fn insert_player(&mut self, p: Player) -> Result<(), TournamentError> {
        if self.players.contains_key(&p.player_id) {
            return Err(TournamentError::DuplicatePlayer(p.player_id));
        }
        self.players.insert(p.player_id, p);
        Ok(())
    }

    pub fn insert_venue(&mut self, v: Venue) -> Result<(), TournamentError> {
        if self.venues.contains_key(&v.venue_id) {
            return Err(TournamentError::DuplicateVenue(v.venue_id));
        }
        self.venues.insert(v.venue_id, v);
        Ok(())
    }

    /// Remove a tournament together with its registrations and roster rows.
    /// Match rows are purged separately by the registry logic.
    pub fn remove_tournament(&mut self, id: TournamentId) -> Option<Tournament> {
        let t = self.tournaments.remove(&id)?;
        self.entries.retain(|(tr, _), _| *tr != id);
        self.roster.retain(|(tr, _, _), _| *tr != id);
        Some(t)
    }

    pub fn insert_entry(&mut self, e: TeamEntry) -> Result<(), TournamentError> {
        let key = (e.tr_id, e.team_id);
        if self.entries.contains_key(&key) {
            return Err(TournamentError::TeamAlreadyRegistered {
                team_id: e.team_id,
                tr_id: e.tr_id,
            });
        }
        self.entries.insert(key, e);
        Ok(())
    }

    pub fn insert_roster_spot(&mut self, s: RosterSpot) -> Result<(), TournamentError> {
        let key = (s.tr_id, s.team_id, s.player_id);
        if self.roster.contains_key(&key) {
            return Err(TournamentError::PlayerAlreadyOnTeam {
                player_id: s.player_id,
                team_id: s.team_id,
            });
        }
        self.roster.insert(key, s);
        Ok(())
    }

    /// Make `player_id` the captain of the team, clearing the flag from
    /// whoever held it.
    pub fn set_captain(
        &mut self,
        tr_id: TournamentId,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Result<RosterSpot, TournamentError> {
        if !self.roster.contains_key(&(tr_id, team_id, player_id)) {
            return Err(TournamentError::PlayerNotOnTeam(player_id));
        }
        let mut chosen = None;
        for ((tr, team, player), spot) in self.roster.iter_mut() {
            if *tr == tr_id && *team == team_id {
                spot.is_captain = *player == player_id;
                if spot.is_captain {
                    chosen = Some(spot.clone());
                }
            }
        }
        chosen.ok_or(TournamentError::PlayerNotOnTeam(player_id))
    }
}
