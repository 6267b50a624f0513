//! The scheduled and played match stores, sharing one identity space.

use crate::models::{
    MatchDetail, MatchKey, PlayedMatch, ScheduledMatch, TeamId, TournamentError, TournamentId,
};
use std::collections::HashMap;

/// The two match tables plus per-team detail rows. A `MatchKey` is present
/// in at most one of `scheduled` and `played`; both insert paths enforce it.
#[derive(Clone, Debug, Default)]
pub struct MatchStore {
    scheduled: HashMap<MatchKey, ScheduledMatch>,
    played: HashMap<MatchKey, PlayedMatch>,
    details: HashMap<(MatchKey, TeamId), MatchDetail>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled(&self, key: &MatchKey) -> Option<&ScheduledMatch> {
        self.scheduled.get(key)
    }

    pub fn played(&self, key: &MatchKey) -> Option<&PlayedMatch> {
        self.played.get(key)
    }

    /// Fixtures of one tournament (unordered; callers sort for display).
    pub fn scheduled_in(&self, tr_id: TournamentId) -> impl Iterator<Item = &ScheduledMatch> {
        self.scheduled.values().filter(move |m| m.tr_id == tr_id)
    }

    /// Played matches of one tournament (unordered).
    pub fn played_in(&self, tr_id: TournamentId) -> impl Iterator<Item = &PlayedMatch> {
        self.played.values().filter(move |m| m.tr_id == tr_id)
    }

    /// Detail rows of one played match, ordered by team id.
    /// Empty for directly created rows, two entries after a transition.
    pub fn details_of(&self, key: &MatchKey) -> Vec<&MatchDetail> {
        let mut rows: Vec<&MatchDetail> = self
            .details
            .iter()
            .filter(|((k, _), _)| k == key)
            .map(|(_, d)| d)
            .collect();
        rows.sort_by_key(|d| d.team_id);
        rows
    }

    pub fn detail(&self, key: &MatchKey, team_id: TeamId) -> Option<&MatchDetail> {
        self.details.get(&(*key, team_id))
    }

    pub fn insert_scheduled(&mut self, m: ScheduledMatch) -> Result<(), TournamentError> {
        let key = m.key();
        if self.scheduled.contains_key(&key) || self.played.contains_key(&key) {
            return Err(TournamentError::DuplicateMatchNo {
                tr_id: key.tr_id,
                match_no: key.match_no,
            });
        }
        self.scheduled.insert(key, m);
        Ok(())
    }

    pub fn insert_played(&mut self, m: PlayedMatch) -> Result<(), TournamentError> {
        let key = m.key();
        if self.scheduled.contains_key(&key) || self.played.contains_key(&key) {
            return Err(TournamentError::DuplicateMatchNo {
                tr_id: key.tr_id,
                match_no: key.match_no,
            });
        }
        self.played.insert(key, m);
        Ok(())
    }

    /// Insert one per-team detail row. Only the transition engine writes
    /// these; a duplicate means the write sequence itself is broken.
    pub fn insert_detail(&mut self, d: MatchDetail) -> Result<(), TournamentError> {
        let key = (
            MatchKey {
                tr_id: d.tr_id,
                match_no: d.match_no,
            },
            d.team_id,
        );
        if self.details.contains_key(&key) {
            return Err(TournamentError::TransactionFailed(format!(
                "duplicate detail row for team {}",
                d.team_id
            )));
        }
        self.details.insert(key, d);
        Ok(())
    }

    /// Replace the mutable fields of an existing fixture.
    pub fn replace_scheduled(&mut self, m: ScheduledMatch) -> Result<(), TournamentError> {
        let key = m.key();
        match self.scheduled.get_mut(&key) {
            Some(slot) => {
                *slot = m;
                Ok(())
            }
            None => Err(TournamentError::FixtureNotFound {
                tr_id: key.tr_id,
                match_no: key.match_no,
            }),
        }
    }

    /// Replace the mutable fields of an existing played match.
    pub fn replace_played(&mut self, m: PlayedMatch) -> Result<(), TournamentError> {
        let key = m.key();
        match self.played.get_mut(&key) {
            Some(slot) => {
                *slot = m;
                Ok(())
            }
            None => Err(TournamentError::MatchNotFound {
                tr_id: key.tr_id,
                match_no: key.match_no,
            }),
        }
    }

    /// Remove a fixture; `None` means no row was affected.
    pub fn remove_scheduled(&mut self, key: &MatchKey) -> Option<ScheduledMatch> {
        self.scheduled.remove(key)
    }

    /// Remove a played match along with its detail rows.
    pub fn remove_played(&mut self, key: &MatchKey) -> Option<PlayedMatch> {
        let row = self.played.remove(key)?;
        self.details.retain(|(k, _), _| k != key);
        Some(row)
    }

    /// Drop every row belonging to a tournament (cascade on tournament
    /// delete). Returns how many match rows went away.
    pub fn purge_tournament(&mut self, tr_id: TournamentId) -> usize {
        let before = self.scheduled.len() + self.played.len();
        self.scheduled.retain(|k, _| k.tr_id != tr_id);
        self.played.retain(|k, _| k.tr_id != tr_id);
        self.details.retain(|(k, _), _| k.tr_id != tr_id);
        before - (self.scheduled.len() + self.played.len())
    }

    /// Run `f` as one unit of work: if it returns `Err`, every write it
    /// made is undone and the store is exactly as before the call.
    pub fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, TournamentError>,
    ) -> Result<T, TournamentError> {
        let snapshot = self.clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(e) => {
                *self = snapshot;
                Err(e)
            }
        }
    }
}
