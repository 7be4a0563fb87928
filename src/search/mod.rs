mod category;
mod filter;

pub use category::{filter_by_category, CategoryFilter};
pub use filter::{filter_places, filter_refs};

use crate::catalog::Place;

/// Narrow places by category first, then by free-text query
pub fn apply<'a>(items: &'a [Place], category: &CategoryFilter, query: &str) -> Vec<&'a Place> {
    match category {
        CategoryFilter::All => filter_places(items, query),
        CategoryFilter::Only(_) => {
            let by_category = filter_by_category(items, category);
            filter_refs(&by_category, query)
        }
    }
}
