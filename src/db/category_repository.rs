// src/db/category_repository.rs
// DOCUMENTATION: Database access layer for categories
// PURPOSE: Category lookups for listing and import-time matching

use crate::errors::DirectoryError;
use crate::models::Category;
use sqlx::PgPool;

pub struct CategoryRepository;

impl CategoryRepository {
    /// List all categories ordered by name
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, DirectoryError> {
        let categories: Vec<Category> = sqlx::query_as(
            r#"
            SELECT id, name, created_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list categories: {}", e);
            DirectoryError::StoreError(e.to_string())
        })?;

        Ok(categories)
    }
}
