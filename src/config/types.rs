use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory holding cached catalog metadata
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub markers: MarkersConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CatalogConfig {
    /// Cached response of `GET /places`
    #[serde(default = "default_places_path")]
    pub places: PathBuf,

    /// Cached response of `GET /place-types`
    #[serde(default = "default_place_types_path")]
    pub place_types: PathBuf,

    #[serde(default = "default_stale_after_hours")]
    pub stale_after_hours: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            places: default_places_path(),
            place_types: default_place_types_path(),
            stale_after_hours: default_stale_after_hours(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct MarkersConfig {
    #[serde(default = "default_max_markers")]
    pub max_markers: usize,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            max_markers: default_max_markers(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a query is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct NavigationConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Movement since the last route fetch that triggers a new one
    #[serde(default = "default_reroute_threshold_m")]
    pub reroute_threshold_m: f64,

    #[serde(default = "default_arrival_radius_m")]
    pub arrival_radius_m: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            reroute_threshold_m: default_reroute_threshold_m(),
            arrival_radius_m: default_arrival_radius_m(),
        }
    }
}
