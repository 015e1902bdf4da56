//! Route handlers
//!
//! All HTTP request handlers organized by domain.

use crate::response::ApiError;

pub mod categories;
pub mod health;
pub mod interactions;
pub mod moderation;
pub mod posts;
pub mod replies;

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
