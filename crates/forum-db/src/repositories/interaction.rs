//! PostgreSQL implementation of InteractionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Interaction;
use forum_core::traits::{InteractionRepository, RepoResult};
use forum_core::value_objects::{InteractionType, Snowflake, TargetType};

use crate::mappers::parse_interaction_type;
use crate::models::{InteractionCountModel, UserInteractionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of InteractionRepository
#[derive(Clone)]
pub struct PgInteractionRepository {
    pool: PgPool,
}

impl PgInteractionRepository {
    /// Create a new PgInteractionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionRepository for PgInteractionRepository {
    #[instrument(skip(self, interaction), fields(
        user_id = %interaction.user_id,
        target = %interaction.target_id,
        kind = %interaction.interaction_type
    ))]
    async fn create(&self, interaction: &Interaction) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO interactions (user_id, target_type, target_id, interaction_type, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, target_type, target_id, interaction_type) DO NOTHING
            "#,
        )
        .bind(interaction.user_id.into_inner())
        .bind(interaction.target_type.as_str())
        .bind(interaction.target_id.into_inner())
        .bind(interaction.interaction_type.as_str())
        .bind(interaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_id: Snowflake,
        interaction_type: InteractionType,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM interactions
            WHERE user_id = $1 AND target_type = $2 AND target_id = $3 AND interaction_type = $4
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_type.as_str())
        .bind(target_id.into_inner())
        .bind(interaction_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_by_type(
        &self,
        target_type: TargetType,
        target_id: Snowflake,
    ) -> RepoResult<Vec<(InteractionType, i64)>> {
        let results = sqlx::query_as::<_, InteractionCountModel>(
            r#"
            SELECT interaction_type, COUNT(*) AS count
            FROM interactions
            WHERE target_type = $1 AND target_id = $2
            GROUP BY interaction_type
            "#,
        )
        .bind(target_type.as_str())
        .bind(target_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(|row| Ok((parse_interaction_type(&row.interaction_type)?, row.count)))
            .collect()
    }

    #[instrument(skip(self, target_ids), fields(count = target_ids.len()))]
    async fn find_for_user(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, InteractionType)>> {
        if target_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = target_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, UserInteractionModel>(
            r#"
            SELECT target_id, interaction_type
            FROM interactions
            WHERE user_id = $1 AND target_type = $2 AND target_id = ANY($3)
            ORDER BY target_id, interaction_type
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_type.as_str())
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(|row| {
                Ok((
                    Snowflake::new(row.target_id),
                    parse_interaction_type(&row.interaction_type)?,
                ))
            })
            .collect()
    }
}
