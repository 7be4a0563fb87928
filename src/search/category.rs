use crate::catalog::Place;
use serde::{Deserialize, Serialize};

/// Category filter applied on top of the text query
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `None`, an empty string or "all" mean no filtering
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(id) if id.eq_ignore_ascii_case("all") => CategoryFilter::All,
            Some(id) => CategoryFilter::Only(id.to_string()),
        }
    }

    pub fn accepts(&self, place: &Place) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => place.category.as_deref() == Some(id.as_str()),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(id) => write!(f, "{}", id),
        }
    }
}

pub fn filter_by_category<'a>(items: &'a [Place], filter: &CategoryFilter) -> Vec<&'a Place> {
    items.iter().filter(|p| filter.accepts(p)).collect()
}
