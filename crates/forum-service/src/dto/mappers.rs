//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Posts and replies need collaborator data (author, category display), so
//! they get explicit constructors instead.

use forum_core::{
    AuthorSummary, Category, CategoryDisplay, CategoryStats, ModerationAction, Post, Reply,
};

use super::responses::{CategoryResponse, ModerationActionResponse, PostResponse, ReplyResponse};

// ============================================================================
// Post Mappers
// ============================================================================

impl PostResponse {
    pub fn new(post: &Post, author: AuthorSummary, category: CategoryDisplay) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author,
            category,
            tags: post.tags.clone(),
            is_pinned: post.is_pinned,
            is_locked: post.is_locked,
            is_featured: post.is_featured,
            views_count: post.views_count,
            likes_count: post.likes_count,
            dislikes_count: post.dislikes_count,
            replies_count: post.replies_count,
            last_activity_at: post.last_activity_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

// ============================================================================
// Reply Mappers
// ============================================================================

impl ReplyResponse {
    /// A node with no children attached yet
    pub fn leaf(reply: Reply, author: AuthorSummary) -> Self {
        Self {
            id: reply.id.to_string(),
            post_id: reply.post_id.to_string(),
            parent_reply_id: reply.parent_reply_id.map(|id| id.to_string()),
            depth: reply.depth,
            content: reply.content,
            author,
            likes_count: reply.likes_count,
            dislikes_count: reply.dislikes_count,
            is_edited: reply.is_edited,
            edited_at: reply.edited_at,
            created_at: reply.created_at,
            replies: Vec::new(),
        }
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            description: category.description.clone(),
            color: category.color.clone(),
            icon: category.icon.clone(),
            display_order: category.display_order,
            is_active: category.is_active,
            stats: None,
        }
    }
}

impl CategoryResponse {
    pub fn with_stats(mut self, stats: CategoryStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

// ============================================================================
// Moderation Mappers
// ============================================================================

impl From<&ModerationAction> for ModerationActionResponse {
    fn from(action: &ModerationAction) -> Self {
        Self {
            id: action.id.to_string(),
            moderator_id: action.moderator_id.to_string(),
            action_type: action.action_type.as_str().to_string(),
            target_type: action.target_type.as_str().to_string(),
            target_id: action.target_id.to_string(),
            reason: action.reason.clone(),
            created_at: action.created_at,
        }
    }
}

impl From<ModerationAction> for ModerationActionResponse {
    fn from(action: ModerationAction) -> Self {
        Self::from(&action)
    }
}
