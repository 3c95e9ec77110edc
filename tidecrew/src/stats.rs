//! Crew statistics: the persisted counters and their store
//!
//! One global aggregate, no history and no per-event attribution. The store
//! is a trait so the effect handler can be exercised against a fake; the real
//! one is a JSON file in the user data dir. Writes are last-write-wins across
//! processes - an accepted property of the storage, not a bug to fix.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Smallest trash amount credited per join, in kg.
pub const TRASH_GAIN_MIN: u32 = 5;
/// Largest trash amount credited per join, in kg.
pub const TRASH_GAIN_MAX: u32 = 14;

/// Aggregate counters describing cumulative cleanup participation.
///
/// Serde renames keep the stored-object key names stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewStats {
    #[serde(rename = "cleanupCount")]
    pub cleanup_count: u32,
    #[serde(rename = "trashCollected")]
    pub trash_collected: u32,
    #[serde(rename = "crewSize")]
    pub crew_size: u32,
}

impl Default for CrewStats {
    fn default() -> Self {
        Self {
            cleanup_count: 0,
            trash_collected: 0,
            crew_size: 1,
        }
    }
}

impl CrewStats {
    /// Record one cleanup join: `cleanup_count` gains 1, `trash_collected`
    /// gains a uniform random amount in [`TRASH_GAIN_MIN`, `TRASH_GAIN_MAX`].
    /// Returns the credited trash amount.
    pub fn record_join(&mut self) -> u32 {
        let gained = rand::rng().random_range(TRASH_GAIN_MIN..=TRASH_GAIN_MAX);
        self.cleanup_count += 1;
        self.trash_collected += gained;
        gained
    }
}

/// Read/write access to the persisted statistics.
pub trait StatsStore {
    /// Load the stored value; absent or unreadable data yields the defaults.
    fn load(&self) -> CrewStats;
    /// Persist the given value.
    fn save(&self, stats: &CrewStats) -> io::Result<()>;
}

/// File-backed store holding one JSON object.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform data dir.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tidecrew")
            .join("crew-stats.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> CrewStats {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(stats) => stats,
                Err(err) => {
                    // Corruption-tolerant: a broken counters file is not
                    // worth refusing to start over.
                    warn!(path = %self.path.display(), error = %err,
                        "stored crew stats unreadable, using defaults");
                    CrewStats::default()
                }
            },
            Err(_) => CrewStats::default(),
        }
    }

    fn save(&self, stats: &CrewStats) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(stats).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }
}

/// In-memory store for tests and dry runs.
#[derive(Default)]
pub struct MemoryStore {
    value: std::sync::Mutex<Option<CrewStats>>,
}

impl StatsStore for MemoryStore {
    fn load(&self) -> CrewStats {
        self.value
            .lock()
            .map(|guard| guard.clone().unwrap_or_default())
            .unwrap_or_default()
    }

    fn save(&self, stats: &CrewStats) -> io::Result<()> {
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(stats.clone());
        }
        Ok(())
    }
}
