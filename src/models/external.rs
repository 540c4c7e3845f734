// src/models/external.rs
// DOCUMENTATION: Shapes for data sourced from the external places provider
// PURPOSE: Canonical external-result models, never persisted

use serde::{Deserialize, Serialize};

use super::BusinessResponse;

/// A place sourced live from the external provider
/// DOCUMENTATION: Ephemeral - reconstructed per request or served from cache.
/// The `external` tag distinguishes these from local records in combined lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalPlaceResult {
    /// Provider's place identifier
    pub place_id: String,

    /// Display name
    pub name: String,

    /// Formatted address, when the provider returns one
    pub address: Option<String>,

    /// Geographic coordinates - latitude
    pub latitude: f64,

    /// Geographic coordinates - longitude
    pub longitude: f64,

    /// Best-effort category hint derived from provider types
    pub category_hint: Option<String>,

    /// Provider rating (0-5)
    pub rating: Option<f32>,

    /// Always true; marks the entry as not locally persisted
    pub external: bool,
}

/// Extended external place shape for the details endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,

    /// Formatted address, exposed as the description field
    pub description: Option<String>,

    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f32>,

    /// Directly usable photo URLs (built from photo references + API key)
    pub photo_urls: Vec<String>,

    /// Structured weekly opening hours text (one line per day)
    pub opening_hours: Vec<String>,

    pub reviews: Vec<PlaceReview>,

    pub external: bool,
}

/// A single review from the external provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceReview {
    pub author: Option<String>,
    pub rating: Option<i32>,
    pub text: Option<String>,
    /// Unix timestamp of the review
    pub time: Option<i64>,
}

/// Result of an import-nearby operation
/// DOCUMENTATION: Cached under the import key; a repeat call within the
/// TTL window returns this snapshot without re-checking the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported_count: usize,
    pub businesses: Vec<BusinessResponse>,
}

/// Result of a cache-clear operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCacheResult {
    /// Number of entries deleted (1/0 for the single-key form)
    pub deleted: usize,
}
