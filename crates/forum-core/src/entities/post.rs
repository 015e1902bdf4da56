//! Post entity - a forum thread root

use chrono::{DateTime, Utc};

use crate::entities::InteractionCounts;
use crate::value_objects::Snowflake;

/// Maximum number of tags on a post
pub const MAX_TAGS: usize = 10;

/// Post entity. Counter fields are a cache over the interaction ledger and reply set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub content: String,
    /// Category name; joined to the catalog by name, not by id
    pub category: String,
    pub tags: Vec<String>,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub is_featured: bool,
    pub views_count: i32,
    pub likes_count: i32,
    pub dislikes_count: i32,
    pub replies_count: i32,
    pub last_activity_at: DateTime<Utc>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with zeroed counters
    pub fn new(
        id: Snowflake,
        author_id: Snowflake,
        title: String,
        content: String,
        category: String,
        tags: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            content,
            category,
            tags: normalize_tags(tags),
            is_pinned: false,
            is_locked: false,
            is_featured: false,
            views_count: 0,
            likes_count: 0,
            dislikes_count: 0,
            replies_count: 0,
            last_activity_at: now,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Score used by the `popular` sort
    #[inline]
    pub fn popularity(&self) -> i64 {
        i64::from(self.likes_count) + i64::from(self.replies_count)
    }

    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Overwrite the cached interaction counters
    pub fn apply_counts(&mut self, counts: &InteractionCounts) {
        self.likes_count = counts.likes;
        self.dislikes_count = counts.dislikes;
        if let Some(views) = counts.views {
            self.views_count = views;
        }
    }

    /// Mark a content change, moving `last_activity_at` forward
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = now;
        self.last_activity_at = now.max(self.created_at);
    }
}

/// Lowercase, trim, drop blanks and duplicates, keep first-seen order, cap at [`MAX_TAGS`]
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len().min(MAX_TAGS));
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || out.contains(&tag) {
            continue;
        }
        out.push(tag);
        if out.len() == MAX_TAGS {
            break;
        }
    }
    out
}
