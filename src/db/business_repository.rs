// src/db/business_repository.rs
// DOCUMENTATION: Database access layer for businesses - all SQL queries
// PURPOSE: Abstract database operations from business logic

use crate::errors::DirectoryError;
use crate::models::{Business, CreateBusinessRequest};
use sqlx::PgPool;

/// Coordinates closer than this are treated as the same location
/// when checking whether an imported place already exists locally.
const COORD_EPSILON: f64 = 0.0001;

/// Escape LIKE/ILIKE wildcards in a user-supplied search term so a
/// query like "100%" matches literally instead of every row
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// BusinessRepository: All database operations for businesses
/// DOCUMENTATION: Uses query_as for type-safe SQL queries
pub struct BusinessRepository;

impl BusinessRepository {
    /// Find businesses matching an optional search term and/or category
    /// DOCUMENTATION: Substring match on name/description (case-insensitive),
    /// exact match on category_id when provided
    /// Used by GET /businesses and the aggregator search path
    pub async fn find_matching(
        pool: &PgPool,
        term: Option<&str>,
        category_id: Option<i32>,
    ) -> Result<Vec<Business>, DirectoryError> {
        let pattern = term.map(|t| format!("%{}%", escape_like(t)));

        let businesses: Vec<Business> = sqlx::query_as(
            r#"
            SELECT id, name, description, category_id, address, phone, email,
                   website, latitude, longitude, created_at, updated_at
            FROM businesses
            WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)
              AND ($2::int4 IS NULL OR category_id = $2)
            ORDER BY name
            "#,
        )
        .bind(pattern)
        .bind(category_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to search businesses: {}", e);
            DirectoryError::StoreError(e.to_string())
        })?;

        Ok(businesses)
    }

    /// Get business by ID
    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Business, DirectoryError> {
        let business: Option<Business> = sqlx::query_as(
            r#"
            SELECT id, name, description, category_id, address, phone, email,
                   website, latitude, longitude, created_at, updated_at
            FROM businesses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch business {}: {}", id, e);
            DirectoryError::StoreError(e.to_string())
        })?;

        business.ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    /// Find a business by name and coordinates
    /// DOCUMENTATION: Used by the import path to skip places that were
    /// already imported or created manually. Name match is case-insensitive;
    /// coordinates match within a small epsilon.
    pub async fn find_by_name_and_location(
        pool: &PgPool,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Business>, DirectoryError> {
        let business: Option<Business> = sqlx::query_as(
            r#"
            SELECT id, name, description, category_id, address, phone, email,
                   website, latitude, longitude, created_at, updated_at
            FROM businesses
            WHERE LOWER(name) = LOWER($1)
              AND ABS(latitude - $2) < $4
              AND ABS(longitude - $3) < $4
            LIMIT 1
            "#,
        )
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(COORD_EPSILON)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to look up business by name/location: {}", e);
            DirectoryError::StoreError(e.to_string())
        })?;

        Ok(business)
    }

    /// Create new business in database
    /// DOCUMENTATION: Inserts business and returns created record
    /// Used by POST /businesses and the import path
    pub async fn create(
        pool: &PgPool,
        req: &CreateBusinessRequest,
    ) -> Result<Business, DirectoryError> {
        let business: Business = sqlx::query_as(
            r#"
            INSERT INTO businesses (
                name, description, category_id, address, phone, email,
                website, latitude, longitude, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING id, name, description, category_id, address, phone, email,
                      website, latitude, longitude, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.category_id)
        .bind(&req.address)
        .bind(&req.phone)
        .bind(&req.email)
        .bind(&req.website)
        .bind(req.latitude)
        .bind(req.longitude)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create business: {}", e);
            DirectoryError::StoreError(e.to_string())
        })?;

        log::info!("Created business with id: {}", business.id);
        Ok(business)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain cafe"), "plain cafe");
    }
}
