//! CSV seeding of reference data, the in-memory analog of a SQL seed
//! script. Files are headed CSV matching the model field names, e.g.
//! `teams.csv`: `team_id,team_name`.

use crate::models::{Player, Team, Venue};
use crate::store::ReferenceStore;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Row counts loaded per file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SeedReport {
    pub teams: usize,
    pub players: usize,
    pub venues: usize,
}

/// Load `teams.csv`, `players.csv` and `venues.csv` from `dir` into the
/// store. Missing files are skipped; rows with duplicate ids are logged
/// and dropped.
pub fn load_reference_dir(
    refs: &mut ReferenceStore,
    dir: &Path,
) -> Result<SeedReport, csv::Error> {
    let teams = load_file(&dir.join("teams.csv"), |t: Team| refs.insert_team(t).is_ok())?;
    let players = load_file(&dir.join("players.csv"), |p: Player| {
        refs.insert_player(p).is_ok()
    })?;
    let venues = load_file(&dir.join("venues.csv"), |v: Venue| {
        refs.insert_venue(v).is_ok()
    })?;
    Ok(SeedReport {
        teams,
        players,
        venues,
    })
}

/// Deserialize every row of one CSV file and feed it to `insert`.
/// Returns how many rows `insert` accepted.
fn load_file<T: DeserializeOwned>(
    path: &Path,
    mut insert: impl FnMut(T) -> bool,
) -> Result<usize, csv::Error> {
    if !path.exists() {
        return Ok(0);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut accepted = 0;
    for row in reader.deserialize::<T>() {
        if insert(row?) {
            accepted += 1;
        } else {
            log::warn!("Skipped duplicate row in {}", path.display());
        }
    }
    Ok(accepted)
}
