use crate::search::CategoryFilter;
use serde::Serialize;

/// User-driven state of the map screen. Starts empty and is reset when the
/// user clears everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionState {
    pub selected_id: Option<String>,
    pub category: CategoryFilter,
    pub query: String,
    pub sidebar_open: bool,
}

impl SelectionState {
    /// Select a place. The sidebar closes so the marker is visible.
    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
        self.sidebar_open = false;
    }

    pub fn deselect(&mut self) {
        self.selected_id = None;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
