// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod locator;
pub mod ranking;

pub use distance::{format_distance, haversine_distance};
pub use filters::{filter_offices, matches_category, matches_criteria, matches_region, matches_search};
pub use locator::{OfficeLocator, SearchResult};
pub use ranking::{compare_names, rank_offices};
