use crate::models::{CategoryFilter, Criteria, Office, RegionFilter};

/// Normalize free text for matching
///
/// Returns `None` when the text is empty or whitespace, meaning "no text criterion".
pub fn normalize_search(search_text: &str) -> Option<String> {
    let trimmed = search_text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Check the office name, address and city against an already normalized term
#[inline]
fn contains_term(office: &Office, term: &str) -> bool {
    [&office.name, &office.address, &office.city]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Case-insensitive substring match on name, address or city
pub fn matches_search(office: &Office, search_text: &str) -> bool {
    match normalize_search(search_text) {
        Some(term) => contains_term(office, &term),
        None => true,
    }
}

#[inline]
pub fn matches_category(office: &Office, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => office.category == *category,
        CategoryFilter::Unrecognized(_) => false,
    }
}

#[inline]
pub fn matches_region(office: &Office, region: &RegionFilter) -> bool {
    match region {
        RegionFilter::All => true,
        RegionFilter::Only(region) => office.region == *region,
    }
}

/// Conjunction of the text, category and region criteria
pub fn matches_criteria(office: &Office, criteria: &Criteria) -> bool {
    matches_search(office, &criteria.search_text)
        && matches_category(office, &criteria.category)
        && matches_region(office, &criteria.region)
}

/// Keep the offices that satisfy every criterion, in catalog order
pub fn filter_offices(catalog: &[Office], criteria: &Criteria) -> Vec<Office> {
    let term = normalize_search(&criteria.search_text);

    catalog
        .iter()
        .filter(|office| term.as_deref().map_or(true, |t| contains_term(office, t)))
        .filter(|office| matches_category(office, &criteria.category))
        .filter(|office| matches_region(office, &criteria.region))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfficeCategory;

    fn create_test_office(id: &str, name: &str, city: &str, region: &str, category: OfficeCategory) -> Office {
        Office {
            id: id.to_string(),
            name: name.to_string(),
            address: format!("Calle {} 100", id),
            city: city.to_string(),
            region: region.to_string(),
            latitude: -16.5,
            longitude: -68.13,
            category,
            services: vec!["Consultas".to_string()],
            phone: None,
            email: None,
            description: None,
        }
    }

    fn create_test_catalog() -> Vec<Office> {
        vec![
            create_test_office("1", "Sucursal Sopocachi", "La Paz", "La Paz", OfficeCategory::Branch),
            create_test_office("2", "Agencia El Alto", "El Alto", "La Paz", OfficeCategory::Agency),
            create_test_office("3", "Oficina Tarija", "Tarija", "Tarija", OfficeCategory::Branch),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let office = create_test_office("1", "Sucursal Sopocachi", "La Paz", "La Paz", OfficeCategory::Branch);

        assert!(matches_search(&office, "SOPOCACHI"));
        assert!(matches_search(&office, "  la paz "));
        assert!(matches_search(&office, "calle 1"));
        assert!(!matches_search(&office, "oruro"));
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let office = create_test_office("1", "Sucursal Sopocachi", "La Paz", "La Paz", OfficeCategory::Branch);

        assert!(matches_search(&office, ""));
        assert!(matches_search(&office, "   "));
    }

    #[test]
    fn test_search_ignores_region() {
        let office = create_test_office("2", "Agencia El Alto", "El Alto", "La Paz", OfficeCategory::Agency);

        assert!(!matches_search(&office, "la paz"));
    }

    #[test]
    fn test_category_filter() {
        let catalog = create_test_catalog();
        let criteria = Criteria::new("", OfficeCategory::Branch, "all");

        let ids: Vec<_> = filter_offices(&catalog, &criteria).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_unrecognized_category_matches_nothing() {
        let catalog = create_test_catalog();
        let criteria = Criteria::new("", "Dependencia", "all");

        assert!(filter_offices(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_region_filter_preserves_order() {
        let catalog = create_test_catalog();
        let criteria = Criteria::new("", "all", "La Paz");

        let ids: Vec<_> = filter_offices(&catalog, &criteria).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_criteria_conjunction() {
        let catalog = create_test_catalog();
        let criteria = Criteria::new("alto", OfficeCategory::Branch, "La Paz");

        assert!(filter_offices(&catalog, &criteria).is_empty());
        assert!(matches_criteria(&catalog[1], &Criteria::new("alto", "agency", "La Paz")));
    }
}
