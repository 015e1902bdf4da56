//! Append-only moderation audit log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{Snowflake, TargetType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationActionType {
    DeletePost,
    DeleteReply,
}

impl ModerationActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeletePost => "delete_post",
            Self::DeleteReply => "delete_reply",
        }
    }

    /// The target kind this action applies to
    pub fn target_type(self) -> TargetType {
        match self {
            Self::DeletePost => TargetType::Post,
            Self::DeleteReply => TargetType::Reply,
        }
    }
}

impl fmt::Display for ModerationActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationActionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delete_post" => Ok(Self::DeletePost),
            "delete_reply" => Ok(Self::DeleteReply),
            other => Err(DomainError::Validation(format!(
                "Unknown moderation action: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationAction {
    pub id: Snowflake,
    pub moderator_id: Snowflake,
    pub action_type: ModerationActionType,
    pub target_type: TargetType,
    pub target_id: Snowflake,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl ModerationAction {
    pub fn new(
        id: Snowflake,
        moderator_id: Snowflake,
        action_type: ModerationActionType,
        target_id: Snowflake,
        reason: String,
    ) -> Self {
        Self {
            id,
            moderator_id,
            action_type,
            target_type: action_type.target_type(),
            target_id,
            reason,
            created_at: Utc::now(),
        }
    }
}
