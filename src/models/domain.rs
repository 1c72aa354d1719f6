use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::core::distance::format_distance;

/// Kind of office
///
/// Catalog data written against older labels (`sucursal`, `oficina_central`, ...) is
/// reconciled here, at parse time, and nowhere else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum OfficeCategory {
    #[serde(alias = "oficina_central")]
    #[strum(to_string = "central", serialize = "oficina_central")]
    Central,
    #[serde(alias = "sucursal")]
    #[strum(to_string = "branch", serialize = "sucursal")]
    Branch,
    #[serde(alias = "agencia")]
    #[strum(to_string = "agency", serialize = "agencia")]
    Agency,
    #[serde(alias = "punto_atencion")]
    #[strum(to_string = "service_point", serialize = "punto_atencion")]
    ServicePoint,
}

impl OfficeCategory {
    /// Label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            OfficeCategory::Central => "Oficina Central",
            OfficeCategory::Branch => "Sucursal",
            OfficeCategory::Agency => "Agencia",
            OfficeCategory::ServicePoint => "Punto de Atención",
        }
    }
}

/// A directory record with coordinates and descriptive metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(alias = "department")]
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(alias = "type")]
    pub category: OfficeCategory,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Current position of the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in meters, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// Finite and within [-90, 90] x [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Category criterion
///
/// Parsing never fails: a value naming no known category is kept as
/// `Unrecognized` and matches no office.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(OfficeCategory),
    Unrecognized(String),
}

pub const ALL_CATEGORIES: &str = "all";

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return CategoryFilter::All;
        }
        match OfficeCategory::from_str(value) {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::from(value.as_str())
    }
}

impl From<OfficeCategory> for CategoryFilter {
    fn from(category: OfficeCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category.to_string(),
            CategoryFilter::Unrecognized(value) => value,
        }
    }
}

/// Region (department) criterion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

pub const ALL_REGIONS: &str = "all";

/// Sentinel used by older clients for "every department"
const ALL_REGIONS_LEGACY: &str = "Todos";

impl From<&str> for RegionFilter {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty()
            || value.eq_ignore_ascii_case(ALL_REGIONS)
            || value.eq_ignore_ascii_case(ALL_REGIONS_LEGACY)
        {
            RegionFilter::All
        } else {
            RegionFilter::Only(value.to_string())
        }
    }
}

impl From<String> for RegionFilter {
    fn from(value: String) -> Self {
        RegionFilter::from(value.as_str())
    }
}

impl From<RegionFilter> for String {
    fn from(filter: RegionFilter) -> Self {
        match filter {
            RegionFilter::All => ALL_REGIONS.to_string(),
            RegionFilter::Only(region) => region,
        }
    }
}

/// Active search and filter configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(rename = "searchText", default)]
    pub search_text: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub region: RegionFilter,
}

impl Criteria {
    pub fn new(
        search_text: impl Into<String>,
        category: impl Into<CategoryFilter>,
        region: impl Into<RegionFilter>,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            category: category.into(),
            region: region.into(),
        }
    }
}

/// Office annotated with its distance from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOffice {
    #[serde(flatten)]
    pub office: Office,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    #[serde(rename = "distanceLabel")]
    pub distance_label: Option<String>,
}

impl RankedOffice {
    pub fn new(office: Office, distance_km: Option<f64>) -> Self {
        Self {
            office,
            distance_km,
            distance_label: distance_km.map(format_distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_legacy_labels() {
        let office: Office = serde_json::from_value(serde_json::json!({
            "id": "2",
            "name": "Sucursal Sopocachi",
            "address": "Av. 20 de Octubre 2463",
            "city": "La Paz",
            "department": "La Paz",
            "latitude": -16.5069,
            "longitude": -68.1310,
            "type": "sucursal"
        }))
        .unwrap();

        assert_eq!(office.category, OfficeCategory::Branch);
        assert_eq!(office.region, "La Paz");
        assert!(office.services.is_empty());
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(" ALL "), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("agency"),
            CategoryFilter::Only(OfficeCategory::Agency)
        );
        assert_eq!(
            CategoryFilter::from("punto_atencion"),
            CategoryFilter::Only(OfficeCategory::ServicePoint)
        );
        assert_eq!(
            CategoryFilter::from("Dependencia"),
            CategoryFilter::Unrecognized("Dependencia".to_string())
        );
    }

    #[test]
    fn test_region_filter_sentinels() {
        assert_eq!(RegionFilter::from("all"), RegionFilter::All);
        assert_eq!(RegionFilter::from("Todos"), RegionFilter::All);
        assert_eq!(
            RegionFilter::from("La Paz"),
            RegionFilter::Only("La Paz".to_string())
        );
    }

    #[test]
    fn test_criteria_defaults_from_json() {
        let criteria: Criteria = serde_json::from_str(r#"{"region": "Oruro"}"#).unwrap();

        assert_eq!(criteria.search_text, "");
        assert_eq!(criteria.category, CategoryFilter::All);
        assert_eq!(criteria.region, RegionFilter::Only("Oruro".to_string()));
    }

    #[test]
    fn test_ranked_office_serializes_flat() {
        let office = Office {
            id: "7".to_string(),
            name: "Punto de Atención Quillacollo".to_string(),
            address: "Plaza Principal, Quillacollo".to_string(),
            city: "Quillacollo".to_string(),
            region: "Cochabamba".to_string(),
            latitude: -17.3922,
            longitude: -66.2781,
            category: OfficeCategory::ServicePoint,
            services: vec!["Consultas".to_string()],
            phone: None,
            email: None,
            description: None,
        };

        let json = serde_json::to_value(RankedOffice::new(office, Some(0.482))).unwrap();

        assert_eq!(json["id"], "7");
        assert_eq!(json["category"], "service_point");
        assert_eq!(json["distanceLabel"], "482 m");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_location_validity() {
        assert!(Location::new(-16.5, -68.13).is_valid());
        assert!(!Location::new(f64::NAN, -68.13).is_valid());
        assert!(!Location::new(95.0, 0.0).is_valid());
        assert_eq!(Location::new(0.0, 0.0).with_accuracy(25.0).accuracy, Some(25.0));
    }
}
