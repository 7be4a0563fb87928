use serde::{Deserialize, Deserializer, Serialize};

/// Backend ids arrive either as strings or as bare integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(text) => text,
            RawId::Integer(n) => n.to_string(),
        }
    }
}

fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

fn optional_id_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

/// A point of interest on the campus map: a room, lab or service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Place {
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Id of the place type this place belongs to
    #[serde(
        default,
        deserialize_with = "optional_id_string",
        alias = "place_type_id",
        alias = "type_id"
    )]
    pub category: Option<String>,

    /// Display name of the category, joined from the place types list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(default, alias = "lat")]
    pub latitude: Option<f64>,

    #[serde(default, alias = "lng", alias = "lon")]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub floor: Option<i32>,

    #[serde(default)]
    pub building: Option<String>,
}

impl Place {
    /// Name to show a person, falling back to the id for unnamed places
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Coordinates usable for distance ranking, if both are present and finite
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Classification tag applied to places, e.g. "Laboratorio".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceType {
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
