use std::time::Duration;

use crate::models::{CategoryFilter, Criteria, Location, RegionFilter, SearchOfficesResponse};

/// In-memory memoization of search responses
///
/// The search pipeline is pure over a fixed catalog, so a response depends only
/// on the criteria and the location and can be reused until the TTL expires.
pub struct SearchCache {
    cache: moka::future::Cache<CacheKey, SearchOfficesResponse>,
}

impl SearchCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<SearchOfficesResponse> {
        let hit = self.cache.get(key).await;
        if hit.is_some() {
            tracing::trace!("Search cache hit: {:?}", key);
        }
        hit
    }

    pub async fn set(&self, key: CacheKey, response: SearchOfficesResponse) {
        tracing::trace!("Search cache set: {:?}", key);
        self.cache.insert(key, response).await;
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

/// Everything a search response depends on
///
/// Coordinates are compared bit for bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    text: String,
    category: CategoryFilter,
    region: RegionFilter,
    location: Option<(u64, u64)>,
}

impl CacheKey {
    /// Build a cache key for a search
    ///
    /// Search text is normalized the same way the filter stage does, so
    /// `" Sucre "` and `"sucre"` share an entry.
    pub fn search(criteria: &Criteria, location: Option<&Location>) -> Self {
        Self {
            text: crate::core::filters::normalize_search(&criteria.search_text).unwrap_or_default(),
            category: criteria.category.clone(),
            region: criteria.region.clone(),
            location: location.map(|loc| (loc.latitude.to_bits(), loc.longitude.to_bits())),
        }
    }
}
