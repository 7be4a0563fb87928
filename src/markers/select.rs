use super::region::{planar_distance, ViewportRegion};
use crate::catalog::Place;

/// Choose at most `max_markers` places to draw.
///
/// The selected place is always kept. Remaining slots go to located places
/// nearest the region center (ties by input order); a region without span
/// fills by input order instead. Output keeps input order.
pub fn select_markers<'a>(
    items: &[&'a Place],
    selected_id: Option<&str>,
    region: &ViewportRegion,
    max_markers: usize,
) -> Vec<&'a Place> {
    if items.len() <= max_markers {
        return items.to_vec();
    }

    let pinned = selected_id.and_then(|id| items.iter().position(|p| p.id == id));
    let capacity = max_markers.saturating_sub(usize::from(pinned.is_some()));

    // Places without coordinates can only appear when pinned
    let mut candidates: Vec<(usize, (f64, f64))> = items
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != pinned)
        .filter_map(|(idx, place)| place.coordinates().map(|c| (idx, c)))
        .collect();

    if let Some(center) = region.ranking_center() {
        candidates.sort_by(|a, b| {
            planar_distance(a.1, center)
                .total_cmp(&planar_distance(b.1, center))
                .then(a.0.cmp(&b.0))
        });
    }

    let mut chosen: Vec<usize> = candidates
        .into_iter()
        .take(capacity)
        .map(|(idx, _)| idx)
        .collect();
    chosen.extend(pinned);
    chosen.sort_unstable();

    if chosen.len() < max_markers {
        tracing::debug!(
            "Only {} of {} requested markers have coordinates",
            chosen.len(),
            max_markers
        );
    }

    chosen.into_iter().map(|idx| items[idx]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: (f64, f64) = (-12.0440, -76.9527);

    fn located(id: usize, lat: f64, lng: f64) -> Place {
        Place {
            id: id.to_string(),
            name: Some(format!("Place {}", id)),
            description: None,
            category: None,
            category_name: None,
            latitude: Some(lat),
            longitude: Some(lng),
            floor: None,
            building: None,
        }
    }

    fn unlocated(id: usize) -> Place {
        Place {
            latitude: None,
            longitude: None,
            ..located(id, 0.0, 0.0)
        }
    }

    /// Place `i` sits `i` steps north of the center, so rank equals index
    fn ladder(n: usize) -> Vec<Place> {
        (0..n)
            .map(|i| located(i, CENTER.0 + i as f64 * 0.0001, CENTER.1))
            .collect()
    }

    fn region() -> ViewportRegion {
        ViewportRegion::new(CENTER.0, CENTER.1, 0.01, 0.01)
    }

    fn ids(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_under_cap_returns_all() {
        let places = ladder(5);
        let refs: Vec<&Place> = places.iter().collect();
        let chosen = select_markers(&refs, None, &region(), 5);
        assert_eq!(ids(&chosen), ids(&refs));
    }

    #[test]
    fn test_empty_input() {
        assert!(select_markers(&[], Some("1"), &region(), 30).is_empty());
    }

    #[test]
    fn test_nearest_fill() {
        let places = vec![
            located(0, CENTER.0 + 0.003, CENTER.1),
            located(1, CENTER.0 + 0.001, CENTER.1),
            located(2, CENTER.0 - 0.002, CENTER.1),
            located(3, CENTER.0, CENTER.1 + 0.0005),
        ];
        let refs: Vec<&Place> = places.iter().collect();
        let chosen = select_markers(&refs, None, &region(), 2);
        // Nearest two are 3 and 1, returned in input order
        assert_eq!(ids(&chosen), vec!["1", "3"]);
    }

    #[test]
    fn test_pinned_far_selection_is_kept() {
        let mut places = ladder(50);
        // Reverse so input order does not coincide with distance rank
        places.reverse();
        let refs: Vec<&Place> = places.iter().collect();

        // Place "39" is the 40th nearest
        let chosen = select_markers(&refs, Some("39"), &region(), 30);
        assert_eq!(chosen.len(), 30);
        assert!(chosen.iter().any(|p| p.id == "39"));
        // The other 29 are the 29 nearest
        for i in 0..29 {
            assert!(chosen.iter().any(|p| p.id == i.to_string()));
        }
        assert!(!chosen.iter().any(|p| p.id == "29"));
    }

    #[test]
    fn test_ties_break_by_input_order() {
        // Exactly representable offsets so all three distances are equal
        let places = vec![
            located(0, 0.5, 0.0),
            located(1, -0.5, 0.0),
            located(2, 0.0, 0.5),
        ];
        let refs: Vec<&Place> = places.iter().collect();
        let origin = ViewportRegion::new(0.0, 0.0, 2.0, 2.0);
        let chosen = select_markers(&refs, None, &origin, 2);
        assert_eq!(ids(&chosen), vec!["0", "1"]);
    }

    #[test]
    fn test_zero_span_fills_by_order() {
        let mut places = ladder(10);
        places.reverse();
        let refs: Vec<&Place> = places.iter().collect();
        let flat = ViewportRegion::new(CENTER.0, CENTER.1, 0.0, 0.0);

        let chosen = select_markers(&refs, Some("0"), &flat, 3);
        assert_eq!(ids(&chosen), vec!["9", "8", "0"]);
    }

    #[test]
    fn test_unlocated_skipped_unless_pinned() {
        let places = vec![
            unlocated(0),
            located(1, CENTER.0, CENTER.1),
            unlocated(2),
            located(3, CENTER.0 + 0.001, CENTER.1),
            located(4, CENTER.0 + 0.002, CENTER.1),
        ];
        let refs: Vec<&Place> = places.iter().collect();

        let chosen = select_markers(&refs, None, &region(), 3);
        assert_eq!(ids(&chosen), vec!["1", "3", "4"]);

        let chosen = select_markers(&refs, Some("2"), &region(), 3);
        assert_eq!(ids(&chosen), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_fewer_when_not_enough_located() {
        let places = vec![unlocated(0), unlocated(1), located(2, CENTER.0, CENTER.1)];
        let refs: Vec<&Place> = places.iter().collect();
        let chosen = select_markers(&refs, None, &region(), 2);
        assert_eq!(ids(&chosen), vec!["2"]);
    }

    #[test]
    fn test_zero_cap_still_pins_selection() {
        let places = ladder(4);
        let refs: Vec<&Place> = places.iter().collect();
        assert!(select_markers(&refs, None, &region(), 0).is_empty());
        assert_eq!(ids(&select_markers(&refs, Some("2"), &region(), 0)), vec!["2"]);
    }

    #[test]
    fn test_unknown_selection_is_ignored() {
        let places = ladder(6);
        let refs: Vec<&Place> = places.iter().collect();
        let chosen = select_markers(&refs, Some("missing"), &region(), 3);
        assert_eq!(ids(&chosen), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_deterministic_and_bounded() {
        let mut places = ladder(40);
        places.rotate_left(13);
        let refs: Vec<&Place> = places.iter().collect();
        for max in 1..45 {
            let first = select_markers(&refs, Some("33"), &region(), max);
            let second = select_markers(&refs, Some("33"), &region(), max);
            assert_eq!(ids(&first), ids(&second));
            assert!(first.len() <= max.max(1));
            assert!(first.iter().any(|p| p.id == "33"));
        }
    }
}
