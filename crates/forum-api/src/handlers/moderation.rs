//! Moderation log handlers

use axum::{extract::State, Json};
use forum_service::dto::{ApiResponse, ModerationActionResponse, PagedResponse};
use forum_service::ModerationService;

use crate::extractors::{AuthUser, Pagination};
use crate::response::{envelope, ApiResult};
use crate::state::AppState;

/// Moderation log, newest first. Staff only.
///
/// GET /moderation/actions?page&limit
pub async fn list_actions(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<ApiResponse<PagedResponse<ModerationActionResponse>>>> {
    let service = ModerationService::new(state.service_context());
    let actions = service
        .list_actions(&user, pagination.page, pagination.limit)
        .await?;
    Ok(envelope(actions, "Moderation actions retrieved successfully"))
}
