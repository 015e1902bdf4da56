//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use forum_core::{AuthorSummary, CategoryDisplay, CategoryStats, InteractionCounts, PageMeta};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Success envelope: `{"success": true, "data": ..., "message": ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// One page of items with page-number pagination
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PagedResponse<T> {
    pub fn new(items: Vec<T>, pagination: PageMeta) -> Self {
        Self { items, pagination }
    }
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post with author and category display resolved
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorSummary,
    pub category: CategoryDisplay,
    pub tags: Vec<String>,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub is_featured: bool,
    pub views_count: i32,
    pub likes_count: i32,
    pub dislikes_count: i32,
    pub replies_count: i32,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `GET /posts/{id}`: the post plus its reply forest
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub replies: Vec<ReplyResponse>,
}

// ============================================================================
// Reply Responses
// ============================================================================

/// A node of the reply forest; leaf replies carry an empty `replies` list
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: String,
    pub post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_reply_id: Option<String>,
    pub depth: i16,
    pub content: String,
    pub author: AuthorSummary,
    pub likes_count: i32,
    pub dislikes_count: i32,
    pub is_edited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<ReplyResponse>,
}

impl ReplyResponse {
    /// Number of nodes in this subtree, including itself
    pub fn subtree_len(&self) -> usize {
        1 + self.replies.iter().map(Self::subtree_len).sum::<usize>()
    }
}

// ============================================================================
// Interaction Responses
// ============================================================================

/// Result of `POST /interactions`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AddInteractionResponse {
    pub is_new_interaction: bool,
    pub counts: InteractionCounts,
}

/// Result of `DELETE /interactions`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RemoveInteractionResponse {
    pub was_removed: bool,
    pub counts: InteractionCounts,
}

/// Target id to the interaction kinds the caller holds against it
pub type UserInteractionsResponse = BTreeMap<String, Vec<String>>;

// ============================================================================
// Category Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub display_order: i32,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CategoryStats>,
}

// ============================================================================
// Moderation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ModerationActionResponse {
    pub id: String,
    pub moderator_id: String,
    pub action_type: String,
    pub target_type: String,
    pub target_id: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
