// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for external place lookups
// PURPOSE: Expose aggregator details lookups for provider-sourced places

use crate::errors::DirectoryError;
use crate::services::PlacesAggregator;
use actix_web::{web, HttpResponse, Responder};

/// GET /places/{place_id}
/// Details for an external place (cached; upstream failures surface
/// with the provider message attached)
pub async fn get_place_details(
    aggregator: web::Data<PlacesAggregator>,
    path: web::Path<String>,
) -> Result<impl Responder, DirectoryError> {
    let place_id = path.into_inner();
    let details = aggregator.get_details(&place_id).await?;
    Ok(HttpResponse::Ok().json(details))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places").route("/{place_id}", web::get().to(get_place_details)),
    );
}
