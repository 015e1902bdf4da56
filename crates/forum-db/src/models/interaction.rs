//! Interaction ledger database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for interactions table
#[derive(Debug, Clone, FromRow)]
pub struct InteractionModel {
    pub user_id: i64,
    pub target_type: String,
    pub target_id: i64,
    pub interaction_type: String,
    pub created_at: DateTime<Utc>,
}

/// Row count per interaction kind for one target
#[derive(Debug, Clone, FromRow)]
pub struct InteractionCountModel {
    pub interaction_type: String,
    pub count: i64,
}

/// A kind the user holds against a target
#[derive(Debug, Clone, FromRow)]
pub struct UserInteractionModel {
    pub target_id: i64,
    pub interaction_type: String,
}
