use super::{Place, PlaceType};
use crate::error::CatalogError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a cached backend response from disk
pub fn read_source(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// When the cached response was written, if the filesystem knows
pub fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
    Some(DateTime::<Utc>::from(modified))
}

/// Parse a `GET /places` body. A `null` body yields no places.
pub fn parse_places(raw: &str, path: &Path) -> Result<Vec<Place>, CatalogError> {
    parse_list(raw, path)
}

/// Parse a `GET /place-types` body. A `null` body yields no types.
pub fn parse_place_types(raw: &str, path: &Path) -> Result<Vec<PlaceType>, CatalogError> {
    parse_list(raw, path)
}

fn parse_list<T: DeserializeOwned>(raw: &str, path: &Path) -> Result<Vec<T>, CatalogError> {
    let items: Option<Vec<T>> =
        serde_json::from_str(raw).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    if items.is_none() {
        tracing::debug!("{} contained null, treating as empty", path.display());
    }
    Ok(items.unwrap_or_default())
}
