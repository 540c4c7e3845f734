// src/handlers/businesses.rs
// DOCUMENTATION: HTTP handlers for business and category operations
// PURPOSE: Parse requests, call services/repositories, return responses

use crate::db::{BusinessRepository, CategoryRepository};
use crate::errors::DirectoryError;
use crate::models::{CreateBusinessRequest, SearchQuery};
use crate::services::PlacesAggregator;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

/// Query parameters for GET /businesses
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category_id: Option<i32>,
}

/// GET /businesses
/// List businesses, optionally filtered by category
pub async fn list_businesses(
    pool: web::Data<PgPool>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, DirectoryError> {
    let businesses =
        BusinessRepository::find_matching(pool.get_ref(), None, query.category_id).await?;
    let responses: Vec<_> = businesses.iter().map(|b| b.to_response()).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// GET /businesses/search
/// Combined local + external search via the aggregator
pub async fn search_businesses(
    pool: web::Data<PgPool>,
    aggregator: web::Data<PlacesAggregator>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, DirectoryError> {
    let result = aggregator.search(pool.get_ref(), &query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /businesses/{id}
/// Retrieve a single business
pub async fn get_business(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, DirectoryError> {
    let business = BusinessRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(business.to_response()))
}

/// POST /businesses
/// Create a new business
pub async fn create_business(
    pool: web::Data<PgPool>,
    req: web::Json<CreateBusinessRequest>,
) -> Result<impl Responder, DirectoryError> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err(DirectoryError::ValidationError(e.to_string()));
    }

    let business = BusinessRepository::create(pool.get_ref(), &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(business.to_response()))
}

/// GET /categories
/// List all categories
pub async fn list_categories(
    pool: web::Data<PgPool>,
) -> Result<impl Responder, DirectoryError> {
    let categories = CategoryRepository::list(pool.get_ref()).await?;
    let responses: Vec<_> = categories.iter().map(|c| c.to_response()).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// Configuration for business routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/businesses")
            .route("", web::get().to(list_businesses))
            .route("", web::post().to(create_business))
            .route("/search", web::get().to(search_businesses))
            .route("/{id}", web::get().to(get_business)),
    )
    .route("/categories", web::get().to(list_categories));
}
