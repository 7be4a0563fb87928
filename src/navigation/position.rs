use crate::error::NavigationError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;

/// One GPS sample
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Fix {
    #[serde(alias = "lat")]
    pub latitude: f64,

    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,

    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

impl Fix {
    pub fn position(&self) -> Option<(f64, f64)> {
        if self.latitude.is_finite() && self.longitude.is_finite() {
            Some((self.latitude, self.longitude))
        } else {
            None
        }
    }
}

#[async_trait]
pub trait PositionSource: Send {
    /// Next position sample, or `None` once the source is exhausted
    async fn next_fix(&mut self) -> Result<Option<Fix>, NavigationError>;
}

/// Replays a recorded GPS trace
#[derive(Debug, Default)]
pub struct TracePositionSource {
    fixes: VecDeque<Fix>,
}

#[derive(Deserialize)]
struct TraceFile {
    fixes: Vec<Fix>,
}

impl TracePositionSource {
    pub fn new(fixes: Vec<Fix>) -> Self {
        Self {
            fixes: fixes.into(),
        }
    }

    /// Load a trace from YAML or JSON: `{ fixes: [{ latitude, longitude, at? }] }`
    pub fn load(path: &Path) -> Result<Self, NavigationError> {
        let content = std::fs::read_to_string(path).map_err(|e| NavigationError::ReadTrace {
            path: path.to_path_buf(),
            source: e,
        })?;
        let trace: TraceFile = serde_yaml::from_str(&content)?;
        Ok(Self::new(trace.fixes))
    }

    pub fn remaining(&self) -> usize {
        self.fixes.len()
    }
}

#[async_trait]
impl PositionSource for TracePositionSource {
    async fn next_fix(&mut self) -> Result<Option<Fix>, NavigationError> {
        Ok(self.fixes.pop_front())
    }
}
