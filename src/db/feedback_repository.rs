// src/db/feedback_repository.rs
// DOCUMENTATION: Database access layer for feedback
// PURPOSE: Feedback creation and per-business listing

use crate::errors::DirectoryError;
use crate::models::{CreateFeedbackRequest, Feedback};
use sqlx::PgPool;

pub struct FeedbackRepository;

impl FeedbackRepository {
    /// List feedback for a business, newest first
    pub async fn list_for_business(
        pool: &PgPool,
        business_id: i32,
    ) -> Result<Vec<Feedback>, DirectoryError> {
        let feedback: Vec<Feedback> = sqlx::query_as(
            r#"
            SELECT id, business_id, author, email, rating, message, created_at
            FROM feedback
            WHERE business_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(business_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list feedback for business {}: {}", business_id, e);
            DirectoryError::StoreError(e.to_string())
        })?;

        Ok(feedback)
    }

    /// Create feedback for a business
    pub async fn create(
        pool: &PgPool,
        business_id: i32,
        req: &CreateFeedbackRequest,
    ) -> Result<Feedback, DirectoryError> {
        let feedback: Feedback = sqlx::query_as(
            r#"
            INSERT INTO feedback (business_id, author, email, rating, message, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, business_id, author, email, rating, message, created_at
            "#,
        )
        .bind(business_id)
        .bind(&req.author)
        .bind(&req.email)
        .bind(req.rating)
        .bind(&req.message)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create feedback: {}", e);
            DirectoryError::StoreError(e.to_string())
        })?;

        Ok(feedback)
    }
}
