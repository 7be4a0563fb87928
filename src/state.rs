use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.json";

/// Metadata about the cached catalog sources, persisted between runs
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct State {
    pub sources: HashMap<String, SourceState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceState {
    /// When the cache file was last written by a fetch
    pub fetched_at: DateTime<Utc>,

    /// When the content last differed from the previous fetch
    #[serde(default)]
    pub changed_at: DateTime<Utc>,

    pub fingerprint: String,
}

impl State {
    /// Load state from the state directory
    pub fn load(state_dir: &Path) -> Self {
        let state_path = Self::state_path(state_dir);
        if state_path.exists() {
            match fs::read_to_string(&state_path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// Save state to the state directory
    pub fn save(&self, state_dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(state_dir)?;

        let json = serde_json::to_string_pretty(self)?;
        fs::write(Self::state_path(state_dir), json)
    }

    /// Record a fetch of `source` that produced `content` at `fetched_at`.
    /// `changed_at` only moves when the fingerprint differs.
    pub fn record_source(&mut self, source: &str, content: &str, fetched_at: DateTime<Utc>) {
        let fingerprint = fingerprint(content);

        let changed_at = match self.sources.get(source) {
            Some(existing) if existing.fingerprint == fingerprint => existing.changed_at,
            _ => fetched_at,
        };

        self.sources.insert(
            source.to_string(),
            SourceState {
                fetched_at,
                changed_at,
                fingerprint,
            },
        );
    }

    /// Check if a source was last fetched more than `hours` ago.
    /// A window too large to represent never expires.
    pub fn is_stale(&self, source: &str, hours: u64) -> bool {
        let Some(state) = self.sources.get(source) else {
            return true;
        };
        let Some(window) = i64::try_from(hours).ok().and_then(Duration::try_hours) else {
            return false;
        };
        Utc::now().signed_duration_since(state.fetched_at) >= window
    }

    fn state_path(state_dir: &Path) -> PathBuf {
        state_dir.join(STATE_FILE)
    }
}

fn fingerprint(content: &str) -> String {
    let hash = Sha256::digest(content.as_bytes());
    format!("{:x}", hash)[..16].to_string()
}
