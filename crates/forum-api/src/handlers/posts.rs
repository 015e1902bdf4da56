//! Post handlers
//!
//! Listing, detail, authoring and staff flag endpoints.

use axum::{extract::State, Json};
use forum_service::dto::{
    ApiResponse, CreatePostRequest, ListPostsQuery, PagedResponse, PostDetailResponse,
    PostResponse, UpdatePostFlagsRequest, UpdatePostRequest,
};
use forum_service::PostService;

use crate::extractors::{AuthUser, OptionalAuthUser, QueryParams, SnowflakePath, ValidatedJson};
use crate::response::{envelope, ApiResult, Created};
use crate::state::AppState;

/// List posts
///
/// GET /posts?page&limit&category&sort&search&featured
pub async fn list_posts(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListPostsQuery>,
) -> ApiResult<Json<ApiResponse<PagedResponse<PostResponse>>>> {
    let query = query.into_query()?;

    let service = PostService::new(state.service_context());
    let page = service.list_posts(&query).await?;
    Ok(envelope(page, "Posts retrieved successfully"))
}

/// Get a post with its reply tree
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    OptionalAuthUser(viewer): OptionalAuthUser,
    SnowflakePath(post_id): SnowflakePath,
) -> ApiResult<Json<ApiResponse<PostDetailResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.get_post(viewer.as_ref(), post_id).await?;
    Ok(envelope(post, "Post retrieved successfully"))
}

/// Create post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<ApiResponse<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(&user, request).await?;
    Ok(Created(envelope(post, "Post created successfully")))
}

/// Update post
///
/// PUT /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    SnowflakePath(post_id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<ApiResponse<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.update_post(&user, post_id, request).await?;
    Ok(envelope(post, "Post updated successfully"))
}

/// Soft-delete post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    SnowflakePath(post_id): SnowflakePath,
) -> ApiResult<Json<ApiResponse<()>>> {
    let service = PostService::new(state.service_context());
    service.delete_post(&user, post_id).await?;
    Ok(envelope((), "Post deleted successfully"))
}

/// Pin, lock or feature a post
///
/// PATCH /posts/{post_id}/flags
pub async fn update_flags(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    SnowflakePath(post_id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<UpdatePostFlagsRequest>,
) -> ApiResult<Json<ApiResponse<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.update_flags(&user, post_id, request).await?;
    Ok(envelope(post, "Post flags updated successfully"))
}
