use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::catalog::bolivian_offices;
use crate::core::{
    filters::filter_offices,
    ranking::{compare_names, rank_offices},
};
use crate::models::{CategoryFilter, Criteria, Location, Office, OfficeCategory, RankedOffice};

/// Result of a directory search
#[derive(Debug)]
pub struct SearchResult {
    pub offices: Vec<RankedOffice>,
    pub total_offices: usize,
}

/// Directory search orchestrator - runs the filter and rank stages over a fixed catalog
///
/// # Pipeline Stages
/// 1. Filter by search text, category and region (catalog order preserved)
/// 2. Attach distances from the user location, if any
/// 3. Order by distance, or by name when there is no location
///
/// Holds no mutable state, so one instance can be shared by every worker.
#[derive(Debug, Clone)]
pub struct OfficeLocator {
    catalog: Arc<[Office]>,
}

impl OfficeLocator {
    pub fn new(catalog: Vec<Office>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(bolivian_offices())
    }

    /// Search the directory
    ///
    /// # Arguments
    /// * `criteria` - Active search text, category and region
    /// * `location` - The user's position, `None` if unknown or denied
    ///
    /// # Returns
    /// SearchResult with the surviving offices in rank order
    pub fn search(&self, criteria: &Criteria, location: Option<&Location>) -> SearchResult {
        if let CategoryFilter::Unrecognized(value) = &criteria.category {
            tracing::warn!("Unrecognized office category filter {:?}, no office will match", value);
        }

        let filtered = filter_offices(&self.catalog, criteria);
        let offices = rank_offices(filtered, location);

        tracing::debug!(
            "Search {:?} matched {} of {} offices (location: {})",
            criteria.search_text,
            offices.len(),
            self.catalog.len(),
            location.is_some()
        );

        SearchResult {
            offices,
            total_offices: self.catalog.len(),
        }
    }

    /// The whole catalog, in catalog order
    pub fn offices(&self) -> &[Office] {
        &self.catalog
    }

    pub fn get(&self, id: &str) -> Option<&Office> {
        self.catalog.iter().find(|office| office.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Distinct regions present in the catalog, sorted by name
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = Vec::new();
        for office in self.catalog.iter() {
            if !regions.contains(&office.region) {
                regions.push(office.region.clone());
            }
        }
        regions.sort_by(|a, b| compare_names(a, b));
        regions
    }

    pub fn categories() -> Vec<OfficeCategory> {
        OfficeCategory::iter().collect()
    }

    /// Closest office to a location
    pub fn nearest(&self, location: &Location) -> Option<RankedOffice> {
        rank_offices(self.catalog.to_vec(), Some(location)).into_iter().next()
    }
}

impl Default for OfficeLocator {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_all() {
        let locator = OfficeLocator::with_default_catalog();

        let result = locator.search(&Criteria::default(), None);

        assert_eq!(result.offices.len(), 13);
        assert_eq!(result.total_offices, 13);
    }

    #[test]
    fn test_search_by_region_with_location() {
        let locator = OfficeLocator::with_default_catalog();
        let location = Location::new(-16.5, -68.13);

        let result = locator.search(&Criteria::new("", "all", "La Paz"), Some(&location));

        let ids: Vec<_> = result.offices.iter().map(|r| r.office.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_get_and_contains() {
        let locator = OfficeLocator::with_default_catalog();

        assert_eq!(locator.get("9").map(|o| o.name.as_str()), Some("Agencia Potosí"));
        assert!(locator.contains("13"));
        assert!(!locator.contains("99"));
    }

    #[test]
    fn test_regions_sorted_and_distinct() {
        let locator = OfficeLocator::with_default_catalog();

        let regions = locator.regions();

        assert_eq!(
            regions,
            vec![
                "Beni", "Chuquisaca", "Cochabamba", "La Paz", "Oruro", "Pando", "Potosí",
                "Santa Cruz", "Tarija",
            ]
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(OfficeLocator::categories().len(), 4);
    }

    #[test]
    fn test_nearest() {
        let locator = OfficeLocator::with_default_catalog();
        let location = Location::new(-17.39, -66.16);

        let nearest = locator.nearest(&location).unwrap();

        assert_eq!(nearest.office.id, "6");
    }

    #[test]
    fn test_nearest_empty_catalog() {
        let locator = OfficeLocator::new(vec![]);

        assert!(locator.nearest(&Location::new(0.0, 0.0)).is_none());
    }
}
