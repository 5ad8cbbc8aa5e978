//! Static row source.
//!
//! Records are loaded once before the first render and never mutated by the
//! table itself.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::DatasetError;
use crate::model::{Athlete, TableRow};

const BUNDLED_ATHLETES: &str = include_str!("../data/athletes.json");

/// Parse a JSON array of athlete records.
pub fn load_athletes(json: &str) -> Result<Vec<Athlete>, DatasetError> {
    let athletes: Vec<Athlete> = serde_json::from_str(json)?;
    ensure_unique_keys(&athletes)?;
    log::debug!("Loaded {} athlete records", athletes.len());
    Ok(athletes)
}

/// Read and parse an athlete dataset file.
pub fn load_athletes_from(path: impl AsRef<Path>) -> Result<Vec<Athlete>, DatasetError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Reading dataset from {}", path.display());
    load_athletes(&json)
}

/// The sample dataset shipped with the crate.
pub fn bundled_athletes() -> Result<Vec<Athlete>, DatasetError> {
    load_athletes(BUNDLED_ATHLETES)
}

/// Reject row sets where two records share an identity.
pub fn ensure_unique_keys<T: TableRow>(rows: &[T]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        let key = row.key();
        if !seen.insert(key.clone()) {
            return Err(DatasetError::DuplicateKey {
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
