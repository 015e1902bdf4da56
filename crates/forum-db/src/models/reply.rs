//! Reply database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub parent_reply_id: Option<i64>,
    pub depth: i16,
    pub content: String,
    pub likes_count: i32,
    pub dislikes_count: i32,
    pub is_deleted: bool,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
