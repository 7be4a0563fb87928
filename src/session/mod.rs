//! Map screen session: the explicit state object that feeds the search
//! filter and marker selector, plus caller-side debouncing of typed queries.

mod debounce;
mod replay;
mod selection;

pub use replay::{replay, EventScript};
pub use selection::SelectionState;

use debounce::Debouncer;

use crate::catalog::{Catalog, Place};
use crate::markers::{select_markers, ViewportRegion};
use crate::search::{self, CategoryFilter};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Input events produced by the map screen
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiEvent {
    /// Search box content changed
    Type { text: String },
    /// Map settled after a pan or zoom
    Viewport(ViewportRegion),
    Select { id: String },
    Deselect,
    /// Category chip picked; no id means all categories
    Category {
        #[serde(default)]
        id: Option<String>,
    },
    ToggleSidebar,
    Clear,
    /// Time passes with no input
    Tick,
}

/// One computed marker set, as handed to the renderer
#[derive(Debug, Clone, Serialize)]
pub struct MarkerFrame {
    pub at_ms: u64,
    pub query: String,
    pub category: String,
    pub selected_id: Option<String>,
    pub total: usize,
    pub filtered: usize,
    pub markers: Vec<Place>,
}

pub struct Session<'c> {
    catalog: &'c Catalog,
    max_markers: usize,
    viewport: ViewportRegion,
    selection: SelectionState,
    typing: Debouncer<String>,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog, max_markers: usize, debounce_ms: u64) -> Self {
        Self {
            catalog,
            max_markers,
            viewport: ViewportRegion::default(),
            selection: SelectionState::default(),
            typing: Debouncer::new(debounce_ms),
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn set_viewport(&mut self, region: ViewportRegion) {
        self.viewport = region;
    }

    /// Apply one event at `at_ms`. A typed query that matured before this
    /// event is rendered first, so up to two frames can come back.
    pub fn handle(&mut self, at_ms: u64, event: UiEvent) -> Vec<MarkerFrame> {
        let mut frames = Vec::new();

        if let Some((due, query)) = self.typing.poll(at_ms) {
            self.selection.set_query(&query);
            frames.push(self.render(due));
        }

        let rerender = match event {
            UiEvent::Type { text } => {
                self.typing.push(at_ms, text);
                false
            }
            UiEvent::Viewport(region) => {
                self.viewport = region;
                true
            }
            UiEvent::Select { id } => {
                if self.catalog.place(&id).is_none() {
                    warn!("Ignoring selection of unknown place '{}'", id);
                    false
                } else {
                    self.selection.select(&id);
                    true
                }
            }
            UiEvent::Deselect => {
                self.selection.deselect();
                true
            }
            UiEvent::Category { id } => {
                self.selection
                    .set_category(CategoryFilter::from_arg(id.as_deref()));
                true
            }
            UiEvent::ToggleSidebar => {
                self.selection.toggle_sidebar();
                false
            }
            UiEvent::Clear => {
                self.typing.cancel();
                self.selection.reset();
                true
            }
            UiEvent::Tick => false,
        };

        if rerender {
            frames.push(self.render(at_ms));
        }
        frames
    }

    /// Apply any query still waiting in the debounce window
    pub fn finish(&mut self) -> Option<MarkerFrame> {
        let (due, query) = self.typing.flush()?;
        self.selection.set_query(&query);
        Some(self.render(due))
    }

    /// Run the filter and selector over the current state
    pub fn render(&self, at_ms: u64) -> MarkerFrame {
        let places = &self.catalog.places;
        let filtered = search::apply(places, &self.selection.category, &self.selection.query);
        let markers = select_markers(
            &filtered,
            self.selection.selected_id.as_deref(),
            &self.viewport,
            self.max_markers,
        );

        debug!(
            "Frame at {}ms: {} markers from {} filtered of {}",
            at_ms,
            markers.len(),
            filtered.len(),
            places.len()
        );

        MarkerFrame {
            at_ms,
            query: self.selection.query.clone(),
            category: self.selection.category.to_string(),
            selected_id: self.selection.selected_id.clone(),
            total: places.len(),
            filtered: filtered.len(),
            markers: markers.into_iter().cloned().collect(),
        }
    }
}
