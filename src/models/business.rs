// src/models/business.rs
// DOCUMENTATION: Core data structures for businesses
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::ExternalPlaceResult;

/// Represents a complete business record from the database
/// DOCUMENTATION: This struct maps directly to the businesses table in PostgreSQL
/// Used for internal operations and database queries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Business {
    /// Unique identifier assigned by the store (SERIAL)
    pub id: i32,

    /// Business name - required field for all records
    pub name: String,

    /// Optional detailed description
    pub description: Option<String>,

    /// Category this business belongs to
    pub category_id: Option<i32>,

    /// Physical street address
    pub address: Option<String>,

    /// Phone number
    pub phone: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Website URL
    pub website: Option<String>,

    /// Geographic coordinates - latitude
    pub latitude: f64,

    /// Geographic coordinates - longitude
    pub longitude: f64,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Business {
    /// Convert database Business into API response
    pub fn to_response(&self) -> BusinessResponse {
        BusinessResponse {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            category_id: self.category_id,
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            website: self.website.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request DTO for creating a new business
/// DOCUMENTATION: Data transfer object for POST /businesses endpoint
/// Used for API input validation and database inserts
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateBusinessRequest {
    /// Business name (required)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Category identifier
    pub category_id: Option<i32>,

    /// Physical address
    pub address: Option<String>,

    /// Phone number
    #[validate(length(max = 32))]
    pub phone: Option<String>,

    /// Email address
    #[validate(email)]
    pub email: Option<String>,

    /// Website URL
    #[validate(url)]
    pub website: Option<String>,

    /// Geographic coordinates - latitude
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    /// Geographic coordinates - longitude
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Business response DTO exposed via API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for GET /businesses/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Free-text search term (substring match on name/description)
    pub q: Option<String>,
    /// Exact category filter
    pub category_id: Option<i32>,
}

/// One entry of a combined search result list
/// DOCUMENTATION: Local records and external results share one list;
/// external entries carry an `external: true` tag in their own shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResult {
    Local(BusinessResponse),
    External(ExternalPlaceResult),
}

/// Response for GET /businesses/search
/// Local results always precede external ones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub local_count: usize,
    pub external_count: usize,
}
