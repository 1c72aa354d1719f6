// Unit tests for Office Locator

use office_locator::core::{
    distance::haversine_distance,
    filters::{matches_category, matches_region, matches_search, normalize_search},
    ranking::{collation_key, compare_ids},
};
use office_locator::models::{CategoryFilter, Office, OfficeCategory, RegionFilter};

fn create_test_office() -> Office {
    Office {
        id: "9".to_string(),
        name: "Agencia Potosí".to_string(),
        address: "Calle Bolívar 321, Centro".to_string(),
        city: "Potosí".to_string(),
        region: "Potosí".to_string(),
        latitude: -19.5723,
        longitude: -65.7550,
        category: OfficeCategory::Agency,
        services: vec!["Atención al Cliente".to_string(), "Pagos".to_string()],
        phone: Some("+591 2 6234567".to_string()),
        email: None,
        description: None,
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(-19.5723, -65.7550, -19.5723, -65.7550);
    assert!(distance < 0.01);
}

#[test]
fn test_haversine_distance_la_paz_to_santa_cruz() {
    // La Paz to Santa Cruz is approximately 550 km in a straight line
    let distance = haversine_distance(-16.5000, -68.1193, -17.7833, -63.1821);
    assert!(distance > 500.0 && distance < 600.0, "got {}", distance);
}

#[test]
fn test_search_matches_accented_text_exactly() {
    let office = create_test_office();

    assert!(matches_search(&office, "bolívar"));
    assert!(matches_search(&office, "POTOSÍ"));
    // Substring match, not accent-folding
    assert!(!matches_search(&office, "bolivar"));
}

#[test]
fn test_normalize_search() {
    assert_eq!(normalize_search("  Centro "), Some("centro".to_string()));
    assert_eq!(normalize_search("\t "), None);
}

#[test]
fn test_category_predicates() {
    let office = create_test_office();

    assert!(matches_category(&office, &CategoryFilter::All));
    assert!(matches_category(&office, &CategoryFilter::from("agencia")));
    assert!(!matches_category(&office, &CategoryFilter::Only(OfficeCategory::Central)));
    assert!(!matches_category(&office, &CategoryFilter::Unrecognized("agency ".to_string())));
}

#[test]
fn test_region_predicate_is_exact() {
    let office = create_test_office();

    assert!(matches_region(&office, &RegionFilter::All));
    assert!(matches_region(&office, &RegionFilter::from("Potosí")));
    assert!(!matches_region(&office, &RegionFilter::from("potosí")));
}

#[test]
fn test_collation_key() {
    assert_eq!(collation_key("Punto de Atención"), "punto de atencion");
    assert_eq!(collation_key("ÑUÑOA"), "nunoa");
}

#[test]
fn test_compare_ids() {
    assert!(compare_ids("9", "13").is_lt());
    assert!(compare_ids("13", "13").is_eq());
}
