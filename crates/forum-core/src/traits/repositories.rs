//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every lookup here hides soft-deleted rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Category, CategoryStats, Interaction, InteractionCounts, ModerationAction, Post, Reply, User,
};
use crate::error::DomainError;
use crate::value_objects::{InteractionType, PostQuery, Snowflake, TargetType};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Read-only view of the identity collaborator's user store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find several users at once; missing ids are skipped
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a live post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// One page of live posts matching the query, in the query's sort order
    async fn list(&self, query: &PostQuery) -> RepoResult<Vec<Post>>;

    /// Number of live posts matching the query's filters
    async fn count(&self, query: &PostQuery) -> RepoResult<i64>;

    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Persist title, content, category, tags and timestamps
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Persist pinned, locked and featured flags
    async fn update_flags(&self, post: &Post) -> RepoResult<()>;

    /// Set `is_deleted`; returns whether a live post was affected
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<bool>;

    /// Add one to `replies_count` and move `last_activity_at` to `at`
    async fn increment_replies(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<()>;

    /// Overwrite the cached like, dislike and view counters
    async fn set_counts(&self, id: Snowflake, counts: &InteractionCounts) -> RepoResult<()>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Find a live reply by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reply>>;

    /// Live replies of a post with `depth <= max_depth`, ordered by `(depth, created_at)`
    async fn find_thread(&self, post_id: Snowflake, max_depth: i16) -> RepoResult<Vec<Reply>>;

    async fn create(&self, reply: &Reply) -> RepoResult<()>;

    /// Persist content and edit markers
    async fn update(&self, reply: &Reply) -> RepoResult<()>;

    /// Set `is_deleted`; returns whether a live reply was affected
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<bool>;

    /// Overwrite the cached like and dislike counters
    async fn set_counts(&self, id: Snowflake, counts: &InteractionCounts) -> RepoResult<()>;
}

// ============================================================================
// Interaction Repository
// ============================================================================

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Insert unless the exact tuple exists; returns whether a row was inserted
    async fn create(&self, interaction: &Interaction) -> RepoResult<bool>;

    /// Delete the exact tuple; returns whether a row was removed
    async fn delete(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_id: Snowflake,
        interaction_type: InteractionType,
    ) -> RepoResult<bool>;

    /// Ledger row counts per kind for one target
    async fn count_by_type(
        &self,
        target_type: TargetType,
        target_id: Snowflake,
    ) -> RepoResult<Vec<(InteractionType, i64)>>;

    /// Every `(target_id, kind)` the user holds among `target_ids`
    async fn find_for_user(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, InteractionType)>>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Categories ordered by `display_order`, then name
    async fn list(&self, active_only: bool) -> RepoResult<Vec<Category>>;

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>>;

    /// Insert, or update every field but `id` when the name already exists
    async fn upsert(&self, category: &Category) -> RepoResult<()>;

    /// Live post count and latest activity per category name
    async fn stats(&self) -> RepoResult<Vec<(String, CategoryStats)>>;
}

// ============================================================================
// Moderation Repository
// ============================================================================

/// Append-only; entries are never updated or deleted
#[async_trait]
pub trait ModerationRepository: Send + Sync {
    async fn create(&self, action: &ModerationAction) -> RepoResult<()>;

    /// Newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<ModerationAction>>;

    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Health
// ============================================================================

/// Store reachability check used by readiness probes
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> RepoResult<()>;
}
