//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Snowflake, TargetType};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Reply not found: {0}")]
    ReplyNotFound(Snowflake),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("{target_type} not found: {id}")]
    TargetNotFound { target_type: TargetType, id: Snowflake },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid target type: {0}")]
    InvalidTargetType(String),

    #[error("Invalid interaction type: {0}")]
    InvalidInteractionType(String),

    #[error("Replies cannot be nested deeper than {max} levels")]
    ReplyTooDeep { max: i16 },

    #[error("Parent reply belongs to a different post")]
    ParentReplyMismatch,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("User is banned from posting")]
    UserBanned,

    #[error("Only the author or a moderator can modify this content")]
    NotContentAuthor,

    #[error("Content is locked")]
    ContentLocked,

    #[error("Only moderators and admins can perform this action")]
    StaffOnly,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::TargetNotFound { .. } => "UNKNOWN_TARGET",

            // Validation
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidTargetType(_) => "INVALID_TARGET_TYPE",
            Self::InvalidInteractionType(_) => "INVALID_INTERACTION_TYPE",
            Self::ReplyTooDeep { .. } => "REPLY_TOO_DEEP",
            Self::ParentReplyMismatch => "PARENT_REPLY_MISMATCH",

            // Authorization
            Self::UserBanned => "USER_BANNED",
            Self::NotContentAuthor => "NOT_CONTENT_AUTHOR",
            Self::ContentLocked => "CONTENT_LOCKED",
            Self::StaffOnly => "STAFF_ONLY",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::ReplyNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::TargetNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidTargetType(_)
                | Self::InvalidInteractionType(_)
                | Self::ReplyTooDeep { .. }
                | Self::ParentReplyMismatch
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::UserBanned | Self::NotContentAuthor | Self::ContentLocked | Self::StaffOnly
        )
    }
}
