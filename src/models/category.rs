// src/models/category.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Business category
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Category response DTO exposed via API
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Convert database Category into API response
    pub fn to_response(&self) -> CategoryResponse {
        CategoryResponse {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
