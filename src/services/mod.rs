// Service exports
pub mod cache;
pub mod directions;
pub mod favorites;
pub mod geolocation;

pub use cache::{CacheKey, SearchCache};
pub use directions::{MapsLinks, SharePayload};
pub use favorites::{FavoritesError, FavoritesStore};
pub use geolocation::{resolve_location, GeolocationProvider, LocationError, ReportedLocation};
