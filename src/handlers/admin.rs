// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for import and cache operations
// PURPOSE: Expose nearby-import and cache maintenance via REST endpoints

use crate::config::Config;
use crate::errors::DirectoryError;
use crate::services::{PlacesAggregator, PlacesCache};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;

/// Request body for the import endpoint
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    /// Center point latitude (required)
    pub latitude: Option<f64>,
    /// Center point longitude (required)
    pub longitude: Option<f64>,
    /// Optional search radius in meters (default 1000)
    pub radius: Option<u32>,
    /// Optional provider type filter (e.g., "restaurant")
    pub place_type: Option<String>,
    /// Optional keyword filter
    pub keyword: Option<String>,
}

/// Query parameters for the cache-clear endpoint
#[derive(Debug, Deserialize)]
pub struct ClearCacheQuery {
    /// Specific cache key to delete; omitted means prefix sweep
    pub key: Option<String>,
}

/// POST /admin/import
/// Import nearby places from the external provider into the local store
///
/// DOCUMENTATION: Requires admin authentication via X-Admin-Token header.
/// A repeat call within the import TTL returns the cached snapshot.
pub async fn import_nearby(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    aggregator: web::Data<PlacesAggregator>,
    req: HttpRequest,
    body: web::Json<ImportRequest>,
) -> Result<impl Responder, DirectoryError> {
    // Authenticate admin request
    verify_admin_token(&req, &config)?;

    let (latitude, longitude) = match (body.latitude, body.longitude) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(DirectoryError::ValidationError(
                "latitude and longitude are required".to_string(),
            ))
        }
    };

    log::info!(
        "Admin import requested at ({}, {}), radius={:?}",
        latitude,
        longitude,
        body.radius
    );

    let summary = aggregator
        .import_nearby(
            pool.get_ref(),
            latitude,
            longitude,
            body.radius,
            body.place_type.as_deref(),
            body.keyword.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// DELETE /admin/cache
/// Clear cached provider data, either one key or the full prefix sweep
pub async fn clear_cache(
    config: web::Data<Config>,
    aggregator: web::Data<PlacesAggregator>,
    req: HttpRequest,
    query: web::Query<ClearCacheQuery>,
) -> Result<impl Responder, DirectoryError> {
    verify_admin_token(&req, &config)?;

    let result = aggregator.clear_cache(query.key.as_deref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /admin/cache/stats
/// Cache entry statistics
pub async fn cache_stats(
    config: web::Data<Config>,
    cache: web::Data<Arc<PlacesCache>>,
    req: HttpRequest,
) -> Result<impl Responder, DirectoryError> {
    verify_admin_token(&req, &config)?;

    let stats = cache.stats().await;
    Ok(HttpResponse::Ok().json(stats))
}

/// Verify the X-Admin-Token header against configured admin token
fn verify_admin_token(req: &HttpRequest, config: &Config) -> Result<(), DirectoryError> {
    let token = req
        .headers()
        .get("X-Admin-Token")
        .and_then(|value| value.to_str().ok());

    match token {
        Some(token) if token == config.admin_token => Ok(()),
        _ => {
            log::warn!("Admin request rejected: missing or invalid token");
            Err(DirectoryError::Unauthorized)
        }
    }
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/import", web::post().to(import_nearby))
            .route("/cache", web::delete().to(clear_cache))
            .route("/cache/stats", web::get().to(cache_stats)),
    );
}
