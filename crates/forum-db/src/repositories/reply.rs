//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{InteractionCounts, Reply};
use forum_core::traits::{ReplyRepository, RepoResult};
use forum_core::value_objects::Snowflake;

use crate::models::ReplyModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, post_id, author_id, parent_reply_id, depth, content,
                   likes_count, dislikes_count, is_deleted, is_edited, edited_at,
                   created_at, updated_at
            FROM replies
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn find_thread(&self, post_id: Snowflake, max_depth: i16) -> RepoResult<Vec<Reply>> {
        // `depth` is stored on each row, so one flat scan replaces a recursive walk
        let results = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, post_id, author_id, parent_reply_id, depth, content,
                   likes_count, dislikes_count, is_deleted, is_edited, edited_at,
                   created_at, updated_at
            FROM replies
            WHERE post_id = $1 AND is_deleted = FALSE AND depth <= $2
            ORDER BY depth ASC, created_at ASC, id ASC
            "#,
        )
        .bind(post_id.into_inner())
        .bind(max_depth)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reply::from).collect())
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id, post_id = %reply.post_id))]
    async fn create(&self, reply: &Reply) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO replies (
                id, post_id, author_id, parent_reply_id, depth, content,
                likes_count, dislikes_count, is_deleted, is_edited, edited_at,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(reply.id.into_inner())
        .bind(reply.post_id.into_inner())
        .bind(reply.author_id.into_inner())
        .bind(reply.parent_reply_id.map(Snowflake::into_inner))
        .bind(reply.depth)
        .bind(&reply.content)
        .bind(reply.likes_count)
        .bind(reply.dislikes_count)
        .bind(reply.is_deleted)
        .bind(reply.is_edited)
        .bind(reply.edited_at)
        .bind(reply.created_at)
        .bind(reply.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id))]
    async fn update(&self, reply: &Reply) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE replies
            SET content = $2, is_edited = $3, edited_at = $4, updated_at = $5
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(reply.id.into_inner())
        .bind(&reply.content)
        .bind(reply.is_edited)
        .bind(reply.edited_at)
        .bind(reply.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE replies SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_counts(&self, id: Snowflake, counts: &InteractionCounts) -> RepoResult<()> {
        sqlx::query("UPDATE replies SET likes_count = $2, dislikes_count = $3 WHERE id = $1")
            .bind(id.into_inner())
            .bind(counts.likes)
            .bind(counts.dislikes)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
