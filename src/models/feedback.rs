// src/models/feedback.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Visitor feedback attached to a business
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: i32,
    pub business_id: i32,
    pub author: Option<String>,
    pub email: Option<String>,
    pub rating: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create feedback for a business
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    #[validate(length(max = 120))]
    pub author: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// Feedback response DTO exposed via API
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub id: i32,
    pub business_id: i32,
    pub author: Option<String>,
    pub rating: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Convert database Feedback into API response
    pub fn to_response(&self) -> FeedbackResponse {
        FeedbackResponse {
            id: self.id,
            business_id: self.business_id,
            author: self.author.clone(),
            rating: self.rating,
            message: self.message.clone(),
            created_at: self.created_at,
        }
    }
}
