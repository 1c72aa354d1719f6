//! Office Locator - location-aware office directory service
//!
//! This library provides the search pipeline behind the office directory: offices
//! are filtered by free text, category and region, then ranked by distance from
//! the user or, without a location, by name.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{OfficeLocator, SearchResult, distance::{haversine_distance, format_distance}};
pub use models::{Office, OfficeCategory, Location, Criteria, CategoryFilter, RegionFilter, RankedOffice};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let locator = OfficeLocator::default();
        let result = locator.search(&Criteria::default(), Some(&Location::new(-16.5, -68.13)));
        assert_eq!(result.offices[0].office.id, "2");
        assert_eq!(format_distance(haversine_distance(0.0, 0.0, 0.0, 0.0)), "0 m");
    }
}
