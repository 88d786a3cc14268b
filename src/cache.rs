//! Disk-backed cache of resolved stadium coordinates.
//!
//! Keys are the pipe-joined `league|team|stadium` triple, exactly as
//! supplied; no case or whitespace normalization. Values are
//! (longitude, latitude) pairs, serialized as 2-element JSON arrays.
//! Only successful resolutions are stored, so unresolvable stadiums are
//! re-queried on the next run.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

#[derive(Debug, Default)]
pub struct CoordinateCache {
    entries: HashMap<String, (f64, f64)>,
}

impl CoordinateCache {
    /// Load the cache file. A missing file is a cold start, not an
    /// error; an unparsable file is.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No coordinate cache at {}; starting empty", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read cache file {}", path.display()))
            }
        };
        let entries: HashMap<String, (f64, f64)> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse cache file {}", path.display()))?;
        Ok(Self { entries })
    }

    /// Write the full in-memory contents, overwriting the previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write cache file {}", path.display()))
    }

    pub fn get(&self, league: &str, team: &str, stadium: &str) -> Option<(f64, f64)> {
        self.entries.get(&key(league, team, stadium)).copied()
    }

    pub fn insert(&mut self, league: &str, team: &str, stadium: &str, coordinates: (f64, f64)) {
        self.entries.insert(key(league, team, stadium), coordinates);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn key(league: &str, team: &str, stadium: &str) -> String {
    format!("{league}|{team}|{stadium}")
}
