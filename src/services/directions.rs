use serde::{Deserialize, Serialize};

use crate::models::{Location, Office};

pub const DEFAULT_MAPS_BASE_URL: &str = "https://www.google.com/maps";

/// Content handed to a platform share action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
    /// Fallback when the platform cannot share: copied to the clipboard instead
    #[serde(rename = "clipboardText")]
    pub clipboard_text: String,
    #[serde(rename = "searchUrl")]
    pub search_url: String,
}

/// Builds links into an external maps service
#[derive(Debug, Clone)]
pub struct MapsLinks {
    base_url: String,
}

impl MapsLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Driving directions between two points
    pub fn directions_url(&self, from: &Location, to: &Location) -> String {
        format!(
            "{base}/dir/{flat},{flon}/{tlat},{tlon}/@{tlat},{tlon},15z/data=!3m1!4b1!4m2!4m1!3e0",
            base = self.base_url,
            flat = from.latitude,
            flon = from.longitude,
            tlat = to.latitude,
            tlon = to.longitude,
        )
    }

    /// Pin at a coordinate
    pub fn place_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}?q={},{}", self.base_url, latitude, longitude)
    }

    /// Text search for an office by name and address
    pub fn search_url(&self, office: &Office) -> String {
        let query = format!("{}, {}, {}", office.name, office.address, office.city);
        format!(
            "{}/search/?api=1&query={}",
            self.base_url,
            urlencoding::encode(&query)
        )
    }

    pub fn share_payload(&self, office: &Office) -> SharePayload {
        let url = self.place_url(office.latitude, office.longitude);
        SharePayload {
            title: format!("Oficina: {}", office.name),
            text: format!("{} - {}", office.name, office.address),
            clipboard_text: format!("{}\n{}\n{}", office.name, office.address, url),
            search_url: self.search_url(office),
            url,
        }
    }
}

impl Default for MapsLinks {
    fn default() -> Self {
        Self::new(DEFAULT_MAPS_BASE_URL)
    }
}
