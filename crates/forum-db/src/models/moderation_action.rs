//! Moderation audit log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for moderation_actions table
#[derive(Debug, Clone, FromRow)]
pub struct ModerationActionModel {
    pub id: i64,
    pub moderator_id: i64,
    pub action_type: String,
    pub target_type: String,
    pub target_id: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
