//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreatePostRequest, CreateReplyRequest, InteractionRequest, ListCategoriesQuery,
    ListPostsQuery, UpdatePostFlagsRequest, UpdatePostRequest, UpdateReplyRequest,
    UserInteractionsQuery, MAX_LOOKUP_IDS,
};

// Re-export commonly used response types
pub use responses::{
    AddInteractionResponse, ApiResponse, CategoryResponse, HealthChecks, HealthResponse,
    ModerationActionResponse, PagedResponse, PostDetailResponse, PostResponse, ReadinessResponse,
    RemoveInteractionResponse, ReplyResponse, UserInteractionsResponse,
};
