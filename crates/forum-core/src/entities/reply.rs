//! Reply entity - a node in a post's bounded-depth reply tree

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Deepest allowed nesting level; top-level replies are depth 0
pub const MAX_REPLY_DEPTH: i16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub parent_reply_id: Option<Snowflake>,
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

impl Reply {
    /// Create a reply. `depth` must already be validated against the parent.
    pub fn new(
        id: Snowflake,
        post_id: Snowflake,
        author_id: Snowflake,
        parent_reply_id: Option<Snowflake>,
        depth: i16,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            post_id,
            author_id,
            parent_reply_id,
            depth,
            content,
            likes_count: 0,
            dislikes_count: 0,
            is_deleted: false,
            is_edited: false,
            edited_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Replace the content; marks the reply edited only when it actually changes
    pub fn edit(&mut self, content: String) {
        if content == self.content {
            return;
        }
        let now = Utc::now();
        self.content = content;
        self.is_edited = true;
        self.edited_at = Some(now);
        self.updated_at = now;
    }
}
