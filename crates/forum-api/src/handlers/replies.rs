//! Reply handlers

use axum::{extract::State, Json};
use forum_service::dto::{ApiResponse, CreateReplyRequest, ReplyResponse, UpdateReplyRequest};
use forum_service::ReplyService;

use crate::extractors::{AuthUser, SnowflakePath, ValidatedJson};
use crate::response::{envelope, ApiResult, Created};
use crate::state::AppState;

/// Reply tree of a post, without the post itself
///
/// GET /posts/{post_id}/replies
pub async fn get_thread(
    State(state): State<AppState>,
    SnowflakePath(post_id): SnowflakePath,
) -> ApiResult<Json<ApiResponse<Vec<ReplyResponse>>>> {
    let service = ReplyService::new(state.service_context());
    let replies = service.get_thread(post_id).await?;
    Ok(envelope(replies, "Replies retrieved successfully"))
}

/// POST /replies
pub async fn create_reply(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReplyRequest>,
) -> ApiResult<Created<Json<ApiResponse<ReplyResponse>>>> {
    let service = ReplyService::new(state.service_context());
    let reply = service.create_reply(&user, request).await?;
    Ok(Created(envelope(reply, "Reply created successfully")))
}

/// PUT /replies/{reply_id}
pub async fn update_reply(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    SnowflakePath(reply_id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<UpdateReplyRequest>,
) -> ApiResult<Json<ApiResponse<ReplyResponse>>> {
    let service = ReplyService::new(state.service_context());
    let reply = service.update_reply(&user, reply_id, request).await?;
    Ok(envelope(reply, "Reply updated successfully"))
}

/// DELETE /replies/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    SnowflakePath(reply_id): SnowflakePath,
) -> ApiResult<Json<ApiResponse<()>>> {
    let service = ReplyService::new(state.service_context());
    service.delete_reply(&user, reply_id).await?;
    Ok(envelope((), "Reply deleted successfully"))
}
