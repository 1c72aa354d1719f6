// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CategoryFilter, Criteria, Location, Office, OfficeCategory, RankedOffice, RegionFilter,
    ALL_CATEGORIES, ALL_REGIONS,
};
pub use requests::{DirectionsQuery, SearchOfficesRequest};
pub use responses::{
    DirectionsResponse, ErrorResponse, FavoriteResponse, FavoritesResponse, FilterOption,
    FiltersResponse, HealthResponse, SearchOfficesResponse,
};
