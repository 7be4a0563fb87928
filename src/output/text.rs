use crate::catalog::Place;
use crate::navigation::NavigationSummary;
use crate::session::MarkerFrame;

/// Markdown-style table of places
pub fn format_places(places: &[&Place]) -> String {
    if places.is_empty() {
        return "*No places*\n".to_string();
    }

    let mut content = String::new();
    content.push_str("| Id | Name | Category | Building | Floor | Location |\n");
    content.push_str("|----|------|----------|----------|-------|----------|\n");

    for place in places {
        let location = match place.coordinates() {
            Some((lat, lng)) => format!("{:.5}, {:.5}", lat, lng),
            None => "-".to_string(),
        };
        let floor = place
            .floor
            .map(|f| f.to_string())
            .unwrap_or_else(|| "-".to_string());

        content.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            place.id,
            place.display_name(),
            place.category_name.as_deref().unwrap_or("-"),
            place.building.as_deref().unwrap_or("-"),
            floor,
            location
        ));
    }
    content
}

pub fn format_frame(frame: &MarkerFrame) -> String {
    let mut content = String::new();

    content.push_str(&format!("## Frame @ {}ms\n\n", frame.at_ms));
    content.push_str(&format!(
        "- **Query:** `{}`\n- **Category:** {}\n",
        frame.query, frame.category
    ));
    if let Some(selected) = &frame.selected_id {
        content.push_str(&format!("- **Selected:** {}\n", selected));
    }
    content.push_str(&format!(
        "- **Markers:** {} of {} filtered ({} total)\n\n",
        frame.markers.len(),
        frame.filtered,
        frame.total
    ));

    let refs: Vec<&Place> = frame.markers.iter().collect();
    content.push_str(&format_places(&refs));
    content
}

pub fn format_navigation(summary: &NavigationSummary) -> String {
    let mut content = String::new();

    content.push_str("| Metric | Value |\n");
    content.push_str("|--------|-------|\n");
    let status = if summary.arrived {
        "✅ Arrived"
    } else {
        "⏹️ Trace ended"
    };
    content.push_str(&format!("| Status | {} |\n", status));
    content.push_str(&format!("| Fixes | {} |\n", summary.fixes));
    content.push_str(&format!("| Route fetches | {} |\n", summary.refetches));
    if summary.failed_fetches > 0 {
        content.push_str(&format!("| Failed fetches | {} |\n", summary.failed_fetches));
    }
    content.push_str(&format!("| Narrations | {} |\n", summary.narrations));
    if let Some(remaining) = summary.remaining_m {
        content.push_str(&format!("| Remaining | {:.0} m |\n", remaining));
    }
    if let Some(route) = &summary.route {
        content.push_str(&format!("| Last instruction | {} |\n", route.instruction));
    }
    content
}
