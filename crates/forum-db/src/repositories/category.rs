//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Category, CategoryStats};
use forum_core::traits::{CategoryRepository, RepoResult};

use crate::models::{CategoryModel, CategoryStatsModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn list(&self, active_only: bool) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, name, description, color, icon, display_order, is_active, created_at
            FROM categories
            WHERE is_active OR NOT $1
            ORDER BY display_order, name
            "#,
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, name, description, color, icon, display_order, is_active, created_at
            FROM categories
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self, category), fields(name = %category.name))]
    async fn upsert(&self, category: &Category) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, color, icon, display_order, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (name) DO UPDATE
            SET description = EXCLUDED.description,
                color = EXCLUDED.color,
                icon = EXCLUDED.icon,
                display_order = EXCLUDED.display_order,
                is_active = EXCLUDED.is_active
            "#,
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.color)
        .bind(&category.icon)
        .bind(category.display_order)
        .bind(category.is_active)
        .bind(category.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<Vec<(String, CategoryStats)>> {
        let results = sqlx::query_as::<_, CategoryStatsModel>(
            r#"
            SELECT category AS name, COUNT(*) AS post_count, MAX(last_activity_at) AS last_activity_at
            FROM posts
            WHERE is_deleted = FALSE
            GROUP BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}
