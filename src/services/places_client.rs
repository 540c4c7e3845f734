// src/services/places_client.rs
// DOCUMENTATION: External places provider client
// PURPOSE: Handle communication with the places API for text, nearby, and details lookups

use crate::errors::DirectoryError;
use crate::models::{ExternalPlaceResult, PlaceDetails, PlaceReview};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Provider place types that carry no category information
const GENERIC_TYPES: [&str; 3] = ["point_of_interest", "establishment", "geocode"];

/// External places provider client
/// DOCUMENTATION: Handles authentication and API calls to the provider
pub struct PlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Provider API key
    api_key: String,
    /// Base URL for the provider API
    base_url: String,
}

/// Response from provider search endpoints
#[derive(Debug, Deserialize, Serialize)]
pub struct ProviderSearchResponse {
    /// Results array from API
    pub results: Vec<ProviderPlace>,
    /// Status of the API call
    pub status: String,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

/// Individual place from the provider API
/// DOCUMENTATION: Shape shared by text search, nearby search, and details;
/// details responses populate the optional fields
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderPlace {
    /// Provider's unique place identifier
    pub place_id: String,
    /// Place name
    pub name: String,
    /// Place types array (e.g., ["restaurant", "food", "point_of_interest"])
    #[serde(default)]
    pub types: Vec<String>,
    /// Geographic location
    pub geometry: ProviderGeometry,
    /// Formatted address (detailed, from details/text search)
    pub formatted_address: Option<String>,
    /// Vicinity (short address, from nearby search)
    pub vicinity: Option<String>,
    /// Rating (0-5)
    pub rating: Option<f32>,
    /// Phone number (formatted for local use)
    pub formatted_phone_number: Option<String>,
    /// Website URL
    pub website: Option<String>,
    /// Opening hours metadata
    pub opening_hours: Option<ProviderOpeningHours>,
    /// User reviews (from details)
    pub reviews: Option<Vec<ProviderReview>>,
    /// Photos (from details)
    pub photos: Option<Vec<ProviderPhoto>>,
}

/// Geographic location from the provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderGeometry {
    /// Location coordinates
    pub location: ProviderLocation,
}

/// Coordinates from the provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Opening hours metadata
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderOpeningHours {
    /// Detailed regular opening hours, one line per weekday
    pub weekday_text: Option<Vec<String>>,
}

/// Review from the provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderReview {
    /// Review author name
    pub author_name: Option<String>,
    /// Rating (1-5)
    pub rating: Option<i32>,
    /// Review text
    pub text: Option<String>,
    /// Time of review (Unix timestamp)
    pub time: Option<i64>,
}

/// Photo from the provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderPhoto {
    /// Photo reference (used to fetch actual photo)
    pub photo_reference: String,
}

impl PlacesClient {
    /// Create new provider client
    /// DOCUMENTATION: Initializes client with API key and explicit request timeout;
    /// a timed-out call is treated as a provider failure
    pub fn new(api_key: String, timeout_seconds: u64) -> Self {
        Self::with_base_url(
            api_key,
            timeout_seconds,
            "https://maps.googleapis.com/maps/api/place".to_string(),
        )
    }

    /// Create a client against a non-default provider endpoint
    pub fn with_base_url(api_key: String, timeout_seconds: u64, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Perform free-text search for places
    pub async fn text_search(&self, query: &str) -> Result<Vec<ProviderPlace>, DirectoryError> {
        let url = format!("{}/textsearch/json", self.base_url);

        let mut params = HashMap::new();
        params.insert("query", query.to_string());
        params.insert("key", self.api_key.clone());

        log::debug!("Provider text search: query={}", query);

        let response = self.execute(&url, &params).await?;
        self.parse_search_response(response).await
    }

    /// Perform nearby search for places
    /// DOCUMENTATION: Searches for places near a geographic point
    ///
    /// # Arguments
    /// * `latitude` - Center point latitude
    /// * `longitude` - Center point longitude
    /// * `radius` - Search radius in meters (max 50000)
    /// * `place_type` - Optional type filter (e.g., "restaurant", "bar")
    /// * `keyword` - Optional keyword search
    pub async fn nearby_search(
        &self,
        latitude: f64,
        longitude: f64,
        radius: u32,
        place_type: Option<&str>,
        keyword: Option<&str>,
    ) -> Result<Vec<ProviderPlace>, DirectoryError> {
        let url = format!("{}/nearbysearch/json", self.base_url);

        let mut params = HashMap::new();
        params.insert("location", format!("{},{}", latitude, longitude));
        params.insert("radius", radius.to_string());
        params.insert("key", self.api_key.clone());

        if let Some(pt) = place_type {
            params.insert("type", pt.to_string());
        }

        if let Some(kw) = keyword {
            params.insert("keyword", kw.to_string());
        }

        log::debug!(
            "Provider nearby search: lat={}, lng={}, radius={}",
            latitude,
            longitude,
            radius
        );

        let response = self.execute(&url, &params).await?;
        self.parse_search_response(response).await
    }

    /// Get detailed information about a specific place
    pub async fn place_details(&self, place_id: &str) -> Result<ProviderPlace, DirectoryError> {
        let url = format!("{}/details/json", self.base_url);

        let params = [
            ("place_id", place_id),
            ("key", &self.api_key),
            (
                "fields",
                "name,place_id,geometry,formatted_address,vicinity,rating,types,\
                 formatted_phone_number,website,opening_hours,reviews,photos",
            ),
        ];

        log::debug!("Provider details lookup: place_id={}", place_id);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Provider details request failed: {}", e);
                DirectoryError::UpstreamError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Provider details error {}: {}", status, body);
            return Err(DirectoryError::UpstreamError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        #[derive(Deserialize)]
        struct DetailsResponse {
            result: Option<ProviderPlace>,
            status: String,
            error_message: Option<String>,
        }

        let api_response: DetailsResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::UpstreamError(format!("Parse error: {}", e)))?;

        match (api_response.status.as_str(), api_response.result) {
            ("OK", Some(result)) => Ok(result),
            ("NOT_FOUND", _) | ("ZERO_RESULTS", _) => {
                Err(DirectoryError::NotFound(place_id.to_string()))
            }
            (other, _) => {
                let msg = api_response
                    .error_message
                    .unwrap_or_else(|| format!("Details status: {}", other));
                log::error!("Provider details failed for {}: {}", place_id, msg);
                Err(DirectoryError::UpstreamError(msg))
            }
        }
    }

    /// Get photo URL from photo reference
    /// DOCUMENTATION: Converts a provider photo_reference to an actual photo URL
    pub fn photo_url(&self, photo_reference: &str, max_width: Option<i32>) -> String {
        let width = max_width.unwrap_or(800);
        format!(
            "{}/photo?maxwidth={}&photoreference={}&key={}",
            self.base_url, width, photo_reference, self.api_key
        )
    }

    /// Map a provider place summary to the canonical external-result shape
    pub fn to_external_result(&self, place: &ProviderPlace) -> ExternalPlaceResult {
        ExternalPlaceResult {
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            address: place
                .formatted_address
                .clone()
                .or_else(|| place.vicinity.clone()),
            latitude: place.geometry.location.lat,
            longitude: place.geometry.location.lng,
            category_hint: Self::category_hint(&place.types),
            rating: place.rating,
            external: true,
        }
    }

    /// Map a provider details response to the canonical details shape
    /// DOCUMENTATION: Formatted address becomes the description; photo URLs
    /// are built from photo references and the API key
    pub fn to_place_details(&self, place: &ProviderPlace) -> PlaceDetails {
        let photo_urls = place
            .photos
            .as_ref()
            .map(|photos| {
                photos
                    .iter()
                    .map(|p| self.photo_url(&p.photo_reference, None))
                    .collect()
            })
            .unwrap_or_default();

        let opening_hours = place
            .opening_hours
            .as_ref()
            .and_then(|hours| hours.weekday_text.clone())
            .unwrap_or_default();

        let reviews = place
            .reviews
            .as_ref()
            .map(|reviews| {
                reviews
                    .iter()
                    .map(|r| PlaceReview {
                        author: r.author_name.clone(),
                        rating: r.rating,
                        text: r.text.clone(),
                        time: r.time,
                    })
                    .collect()
            })
            .unwrap_or_default();

        PlaceDetails {
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            description: place
                .formatted_address
                .clone()
                .or_else(|| place.vicinity.clone()),
            latitude: place.geometry.location.lat,
            longitude: place.geometry.location.lng,
            phone: place.formatted_phone_number.clone(),
            website: place.website.clone(),
            rating: place.rating,
            photo_urls,
            opening_hours,
            reviews,
            external: true,
        }
    }

    /// First provider type that carries category information
    pub fn category_hint(types: &[String]) -> Option<String> {
        types
            .iter()
            .find(|t| !GENERIC_TYPES.contains(&t.as_str()))
            .cloned()
    }

    /// Execute a GET request against a provider endpoint
    async fn execute(
        &self,
        url: &str,
        params: &HashMap<&str, String>,
    ) -> Result<reqwest::Response, DirectoryError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Provider request failed: {}", e);
                DirectoryError::UpstreamError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Provider API error {}: {}", status, body);
            return Err(DirectoryError::UpstreamError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        Ok(response)
    }

    /// Parse a search-style provider response, checking the embedded status
    async fn parse_search_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<ProviderPlace>, DirectoryError> {
        let api_response: ProviderSearchResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse provider response: {}", e);
            DirectoryError::UpstreamError(format!("Parse error: {}", e))
        })?;

        match api_response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                log::info!(
                    "Provider search returned {} results",
                    api_response.results.len()
                );
                Ok(api_response.results)
            }
            other => {
                let msg = api_response
                    .error_message
                    .unwrap_or_else(|| format!("Unknown status: {}", other));
                log::error!("Provider search failed ({}): {}", other, msg);
                Err(DirectoryError::UpstreamError(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place() -> ProviderPlace {
        ProviderPlace {
            place_id: "ChIJ123".to_string(),
            name: "Cafe Kigali".to_string(),
            types: vec![
                "point_of_interest".to_string(),
                "cafe".to_string(),
                "food".to_string(),
            ],
            geometry: ProviderGeometry {
                location: ProviderLocation {
                    lat: -1.9441,
                    lng: 30.0619,
                },
            },
            formatted_address: Some("KN 4 Ave, Kigali, Rwanda".to_string()),
            vicinity: Some("KN 4 Ave".to_string()),
            rating: Some(4.5),
            formatted_phone_number: Some("+250 788 123 456".to_string()),
            website: Some("https://cafekigali.example".to_string()),
            opening_hours: Some(ProviderOpeningHours {
                weekday_text: Some(vec!["Monday: 07:00 – 19:00".to_string()]),
            }),
            reviews: Some(vec![ProviderReview {
                author_name: Some("Aline".to_string()),
                rating: Some(5),
                text: Some("Great coffee".to_string()),
                time: Some(1_700_000_000),
            }]),
            photos: Some(vec![ProviderPhoto {
                photo_reference: "ref123".to_string(),
            }]),
        }
    }

    #[test]
    fn test_category_hint_skips_generic_types() {
        let place = sample_place();
        assert_eq!(
            PlacesClient::category_hint(&place.types),
            Some("cafe".to_string())
        );

        let generic = vec!["point_of_interest".to_string(), "establishment".to_string()];
        assert_eq!(PlacesClient::category_hint(&generic), None);
    }

    #[test]
    fn test_to_external_result() {
        let client = PlacesClient::new("test_key".to_string(), 10);
        let result = client.to_external_result(&sample_place());

        assert_eq!(result.place_id, "ChIJ123");
        assert_eq!(result.name, "Cafe Kigali");
        assert_eq!(result.address, Some("KN 4 Ave, Kigali, Rwanda".to_string()));
        assert_eq!(result.latitude, -1.9441);
        assert_eq!(result.longitude, 30.0619);
        assert_eq!(result.category_hint, Some("cafe".to_string()));
        assert_eq!(result.rating, Some(4.5));
        assert!(result.external);
    }

    #[test]
    fn test_to_place_details() {
        let client = PlacesClient::new("test_key".to_string(), 10);
        let details = client.to_place_details(&sample_place());

        assert_eq!(details.name, "Cafe Kigali");
        // Formatted address is exposed as the description
        assert_eq!(
            details.description,
            Some("KN 4 Ave, Kigali, Rwanda".to_string())
        );
        assert_eq!(details.phone, Some("+250 788 123 456".to_string()));
        assert_eq!(details.opening_hours, vec!["Monday: 07:00 – 19:00"]);
        assert_eq!(details.reviews.len(), 1);
        assert_eq!(details.reviews[0].author, Some("Aline".to_string()));
        assert_eq!(details.reviews[0].time, Some(1_700_000_000));
        assert_eq!(details.photo_urls.len(), 1);
        assert!(details.photo_urls[0].contains("photoreference=ref123"));
        assert!(details.photo_urls[0].contains("key=test_key"));
        assert!(details.external);
    }

    #[test]
    fn test_photo_url_default_width() {
        let client = PlacesClient::new("k".to_string(), 10);
        let url = client.photo_url("abc", None);
        assert!(url.contains("maxwidth=800"));
    }
}
