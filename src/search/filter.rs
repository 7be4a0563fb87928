use crate::catalog::Place;

/// Normalized form of a free-text query, or `None` if it filters nothing
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether any searchable field of `place` contains the normalized needle
pub fn matches(place: &Place, needle: &str) -> bool {
    let fields = [
        place.name.as_deref(),
        place.description.as_deref(),
        place.category_name.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep the places whose name, description or category name contains the
/// query, case-insensitively. Order is preserved; an empty query keeps all.
pub fn filter_places<'a>(items: &'a [Place], query: &str) -> Vec<&'a Place> {
    let refs: Vec<&Place> = items.iter().collect();
    filter_refs(&refs, query)
}

/// Same as [`filter_places`] over an already narrowed list
pub fn filter_refs<'a>(items: &[&'a Place], query: &str) -> Vec<&'a Place> {
    match normalize_query(query) {
        None => items.to_vec(),
        Some(needle) => items
            .iter()
            .copied()
            .filter(|place| matches(place, &needle))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, name: &str, description: Option<&str>, category: Option<&str>) -> Place {
        Place {
            id: id.to_string(),
            name: Some(name.to_string()),
            description: description.map(str::to_string),
            category: None,
            category_name: category.map(str::to_string),
            latitude: None,
            longitude: None,
            floor: None,
            building: None,
        }
    }

    fn ids(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.id.clone()).collect()
    }

    fn campus() -> Vec<Place> {
        vec![
            place("1", "Aula 201", Some("Pabellon A, segundo piso"), Some("Aulas")),
            place("2", "Biblioteca Central", None, Some("Servicios")),
            place("3", "Laboratorio de Redes", Some("Equipos Cisco"), None),
            place("4", "Sala de Estudio", None, Some("Biblioteca")),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let places = campus();
        assert_eq!(ids(&filter_places(&places, "")), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(&filter_places(&places, "   \t")), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(filter_places(&[], "aula").is_empty());
    }

    #[test]
    fn test_name_match() {
        let places = vec![
            place("1", "Aula 201", None, None),
            place("2", "Biblioteca Central", None, None),
        ];
        assert_eq!(ids(&filter_places(&places, "aula")), vec!["1"]);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let places = campus();
        assert_eq!(ids(&filter_places(&places, "  BIBLIOTECA ")), vec!["2", "4"]);
    }

    #[test]
    fn test_category_only_match() {
        let places = campus();
        assert_eq!(ids(&filter_places(&places, "servicios")), vec!["2"]);
    }

    #[test]
    fn test_description_match() {
        let places = campus();
        assert_eq!(ids(&filter_places(&places, "cisco")), vec!["3"]);
    }

    #[test]
    fn test_unnamed_place_matches_other_fields_only() {
        let mut unnamed = place("5", "", Some("Patio de comidas"), None);
        unnamed.name = None;
        let places = vec![unnamed];

        assert_eq!(ids(&filter_places(&places, "patio")), vec!["5"]);
        assert!(filter_places(&places, "5").is_empty());
    }

    #[test]
    fn test_no_match() {
        let places = campus();
        assert!(filter_places(&places, "gimnasio").is_empty());
    }

    #[test]
    fn test_no_accent_folding() {
        let places = vec![place("1", "Pabellón B", None, None)];
        assert_eq!(ids(&filter_places(&places, "PABELLÓN")), vec!["1"]);
        assert!(filter_places(&places, "pabellon").is_empty());
    }

    #[test]
    fn test_idempotent_subset() {
        let places = campus();
        for query in ["a", "bib", "de ", "x", ""] {
            let once = filter_places(&places, query);
            let twice = filter_refs(&once, query);
            assert_eq!(ids(&once), ids(&twice));
            assert!(once.iter().all(|p| places.iter().any(|q| q.id == p.id)));
        }
    }
}
