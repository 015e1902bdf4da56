//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use forum_core::entities::{InteractionCounts, Post};
use forum_core::traits::{PostRepository, RepoResult};
use forum_core::value_objects::{PostQuery, PostSort, Snowflake};

use crate::models::PostModel;

use super::error::{escape_like, map_db_error};

const POST_COLUMNS: &str = "id, author_id, title, content, category, tags, is_pinned, is_locked, \
     is_featured, views_count, likes_count, dislikes_count, replies_count, last_activity_at, \
     is_deleted, created_at, updated_at";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append the WHERE clause shared by `list` and `count`
    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &PostQuery) {
        builder.push(" WHERE is_deleted = FALSE");

        if query.featured_only {
            builder.push(" AND is_featured = TRUE");
        }
        if let Some(category) = &query.category {
            builder.push(" AND category = ").push_bind(category.clone());
        }
        if let Some(term) = &query.search {
            let pattern = format!("%{}%", escape_like(term));
            builder
                .push(" AND (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR content ILIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\' OR ")
                .push_bind(term.clone())
                .push(" = ANY(tags))");
        }
    }

    fn order_clause(sort: PostSort) -> &'static str {
        match sort {
            PostSort::Recent => " ORDER BY is_pinned DESC, last_activity_at DESC, id DESC",
            PostSort::Popular => {
                " ORDER BY is_pinned DESC, (likes_count + replies_count) DESC, \
                 last_activity_at DESC, id DESC"
            }
            PostSort::Trending => {
                " ORDER BY is_pinned DESC, views_count DESC, last_activity_at DESC, id DESC"
            }
        }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1 AND is_deleted = FALSE");
        let result = sqlx::query_as::<_, PostModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &PostQuery) -> RepoResult<Vec<Post>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        Self::push_filters(&mut builder, query);
        builder.push(Self::order_clause(query.sort));
        builder
            .push(" LIMIT ")
            .push_bind(query.limit)
            .push(" OFFSET ")
            .push_bind(query.offset());

        let results = builder
            .build_query_as::<PostModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &PostQuery) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM posts");
        Self::push_filters(&mut builder, query);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                id, author_id, title, content, category, tags,
                is_pinned, is_locked, is_featured,
                views_count, likes_count, dislikes_count, replies_count,
                last_activity_at, is_deleted, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(post.id.into_inner())
        .bind(post.author_id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.category)
        .bind(&post.tags)
        .bind(post.is_pinned)
        .bind(post.is_locked)
        .bind(post.is_featured)
        .bind(post.views_count)
        .bind(post.likes_count)
        .bind(post.dislikes_count)
        .bind(post.replies_count)
        .bind(post.last_activity_at)
        .bind(post.is_deleted)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, category = $4, tags = $5,
                last_activity_at = $6, updated_at = $7
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(post.id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.category)
        .bind(&post.tags)
        .bind(post.last_activity_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update_flags(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET is_pinned = $2, is_locked = $3, is_featured = $4, updated_at = $5
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(post.id.into_inner())
        .bind(post.is_pinned)
        .bind(post.is_locked)
        .bind(post.is_featured)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET is_deleted = TRUE, updated_at = NOW()
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
    async fn increment_replies(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET replies_count = replies_count + 1,
                last_activity_at = GREATEST(last_activity_at, $2)
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_counts(&self, id: Snowflake, counts: &InteractionCounts) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET likes_count = $2, dislikes_count = $3, views_count = COALESCE($4, views_count)
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(counts.likes)
        .bind(counts.dislikes)
        .bind(counts.views)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
