//! PostgreSQL implementation of ModerationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::ModerationAction;
use forum_core::traits::{ModerationRepository, RepoResult};

use crate::models::ModerationActionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ModerationRepository
#[derive(Clone)]
pub struct PgModerationRepository {
    pool: PgPool,
}

impl PgModerationRepository {
    /// Create a new PgModerationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ModerationRepository for PgModerationRepository {
    #[instrument(skip(self, action), fields(action = %action.action_type, target = %action.target_id))]
    async fn create(&self, action: &ModerationAction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO moderation_actions (id, moderator_id, action_type, target_type, target_id, reason, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(action.id.into_inner())
        .bind(action.moderator_id.into_inner())
        .bind(action.action_type.as_str())
        .bind(action.target_type.as_str())
        .bind(action.target_id.into_inner())
        .bind(&action.reason)
        .bind(action.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<ModerationAction>> {
        let results = sqlx::query_as::<_, ModerationActionModel>(
            r#"
            SELECT id, moderator_id, action_type, target_type, target_id, reason, created_at
            FROM moderation_actions
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(ModerationAction::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM moderation_actions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
