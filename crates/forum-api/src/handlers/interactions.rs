//! Interaction handlers
//!
//! Likes, dislikes and bookmarks on posts and replies. Views are recorded by
//! the post detail endpoint, never here.

use axum::{extract::State, Json};
use forum_service::dto::{
    AddInteractionResponse, ApiResponse, InteractionRequest, RemoveInteractionResponse,
    UserInteractionsQuery, UserInteractionsResponse,
};
use forum_service::InteractionService;

use crate::extractors::{AuthUser, QueryParams, ValidatedJson};
use crate::response::{envelope, ApiResult};
use crate::state::AppState;

/// Add interaction
///
/// POST /interactions
pub async fn add_interaction(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<InteractionRequest>,
) -> ApiResult<Json<ApiResponse<AddInteractionResponse>>> {
    let (target_type, interaction_type) = request.parse()?;

    let service = InteractionService::new(state.service_context());
    let response = service
        .add_interaction(user.id, target_type, request.target_id, interaction_type)
        .await?;

    let message = if response.is_new_interaction {
        "Interaction added successfully"
    } else {
        "Interaction already exists"
    };
    Ok(envelope(response, message))
}

/// Remove interaction
///
/// DELETE /interactions (JSON body)
pub async fn remove_interaction(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<InteractionRequest>,
) -> ApiResult<Json<ApiResponse<RemoveInteractionResponse>>> {
    let (target_type, interaction_type) = request.parse()?;

    let service = InteractionService::new(state.service_context());
    let response = service
        .remove_interaction(user.id, target_type, request.target_id, interaction_type)
        .await?;

    let message = if response.was_removed {
        "Interaction removed successfully"
    } else {
        "Interaction not found"
    };
    Ok(envelope(response, message))
}

/// Caller's interactions on a batch of targets
///
/// GET /interactions?target_type=post&target_ids=1,2,3
pub async fn list_user_interactions(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    QueryParams(query): QueryParams<UserInteractionsQuery>,
) -> ApiResult<Json<ApiResponse<UserInteractionsResponse>>> {
    let (target_type, target_ids) = query.parse()?;

    let service = InteractionService::new(state.service_context());
    let interactions = service
        .list_user_interactions(user.id, target_type, &target_ids)
        .await?;
    Ok(envelope(interactions, "User interactions retrieved successfully"))
}
