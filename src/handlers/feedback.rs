// src/handlers/feedback.rs
// DOCUMENTATION: HTTP handlers for business feedback
// PURPOSE: Feedback listing and submission per business

use crate::db::{BusinessRepository, FeedbackRepository};
use crate::errors::DirectoryError;
use crate::models::CreateFeedbackRequest;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /businesses/{id}/feedback
/// List feedback for a business, newest first
pub async fn list_feedback(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, DirectoryError> {
    let business_id = path.into_inner();

    // 404 when the business itself is missing
    BusinessRepository::get_by_id(pool.get_ref(), business_id).await?;

    let feedback = FeedbackRepository::list_for_business(pool.get_ref(), business_id).await?;
    let responses: Vec<_> = feedback.iter().map(|f| f.to_response()).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// POST /businesses/{id}/feedback
/// Submit feedback for a business
pub async fn create_feedback(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<CreateFeedbackRequest>,
) -> Result<impl Responder, DirectoryError> {
    if let Err(e) = req.validate() {
        return Err(DirectoryError::ValidationError(e.to_string()));
    }

    let business_id = path.into_inner();
    BusinessRepository::get_by_id(pool.get_ref(), business_id).await?;

    let feedback =
        FeedbackRepository::create(pool.get_ref(), business_id, &req.into_inner()).await?;
    Ok(HttpResponse::Created().json(feedback.to_response()))
}

/// Configuration for feedback routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/businesses/{id}/feedback")
            .route("", web::get().to(list_feedback))
            .route("", web::post().to(create_feedback)),
    );
}
