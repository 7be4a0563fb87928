//! Cached copy of the backend's places and place types.
//!
//! The catalog is read-only for the rest of the pipeline. Category names are
//! joined onto places once at construction so the search filter can match on
//! them without a lookup table.

mod loader;
mod place;

pub use place::{Place, PlaceType};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::state::State;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const PLACES_SOURCE: &str = "places";
pub const PLACE_TYPES_SOURCE: &str = "place_types";

#[derive(Debug, Clone)]
pub struct Catalog {
    pub places: Vec<Place>,
    pub place_types: Vec<PlaceType>,
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(places: Vec<Place>, place_types: Vec<PlaceType>, fetched_at: DateTime<Utc>) -> Self {
        let mut catalog = Self {
            places,
            place_types,
            fetched_at,
        };
        catalog.resolve_categories();
        catalog
    }

    /// Load both sources from disk. Each file's modification time is taken
    /// as its fetch time and recorded in `state` with its fingerprint.
    pub fn load(config: &CatalogConfig, state: &mut State) -> Result<Self, CatalogError> {
        let places_raw = loader::read_source(&config.places)?;
        let types_raw = loader::read_source(&config.place_types)?;

        let places = loader::parse_places(&places_raw, &config.places)?;
        let place_types = loader::parse_place_types(&types_raw, &config.place_types)?;

        let places_at = loader::modified_at(&config.places).unwrap_or_else(Utc::now);
        let types_at = loader::modified_at(&config.place_types).unwrap_or_else(Utc::now);
        state.record_source(PLACES_SOURCE, &places_raw, places_at);
        state.record_source(PLACE_TYPES_SOURCE, &types_raw, types_at);

        for source in [PLACES_SOURCE, PLACE_TYPES_SOURCE] {
            if state.is_stale(source, config.stale_after_hours) {
                warn!(
                    "Cached {} is older than {}h, consider refreshing it",
                    source, config.stale_after_hours
                );
            }
        }

        debug!(
            "Loaded {} places and {} place types",
            places.len(),
            place_types.len()
        );

        // The catalog is as old as its oldest source
        Ok(Self::new(places, place_types, places_at.min(types_at)))
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn require_place(&self, id: &str) -> Result<&Place, CatalogError> {
        self.place(id)
            .ok_or_else(|| CatalogError::UnknownPlace(id.to_string()))
    }

    pub fn place_type(&self, id: &str) -> Option<&PlaceType> {
        self.place_types.iter().find(|t| t.id == id)
    }

    fn resolve_categories(&mut self) {
        let names: HashMap<&str, &str> = self
            .place_types
            .iter()
            .filter_map(|t| Some((t.id.as_str(), t.name.as_deref()?)))
            .collect();

        for place in &mut self.places {
            if place.category_name.is_some() {
                continue;
            }
            if let Some(name) = place
                .category
                .as_deref()
                .and_then(|id| names.get(id).copied())
            {
                place.category_name = Some(name.to_string());
            }
        }
    }
}
