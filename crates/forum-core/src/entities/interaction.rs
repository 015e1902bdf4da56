//! Interaction ledger rows and the counters derived from them

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{InteractionType, Snowflake, TargetType};

/// One row of the ledger; unique on `(user_id, target_type, target_id, interaction_type)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub user_id: Snowflake,
    pub target_type: TargetType,
    pub target_id: Snowflake,
    pub interaction_type: InteractionType,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(
        user_id: Snowflake,
        target_type: TargetType,
        target_id: Snowflake,
        interaction_type: InteractionType,
    ) -> Self {
        Self {
            user_id,
            target_type,
            target_id,
            interaction_type,
            created_at: Utc::now(),
        }
    }
}

/// Counters recomputed from the ledger. Replies carry no view counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InteractionCounts {
    pub likes: i32,
    pub dislikes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<i32>,
}
