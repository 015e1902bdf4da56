//! Category handlers

use axum::{extract::State, Json};
use forum_service::dto::{ApiResponse, CategoryResponse, ListCategoriesQuery};
use forum_service::CategoryService;

use crate::extractors::QueryParams;
use crate::response::{envelope, ApiResult};
use crate::state::AppState;

/// Active categories in display order
///
/// GET /categories?include_stats=true
pub async fn list_categories(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListCategoriesQuery>,
) -> ApiResult<Json<ApiResponse<Vec<CategoryResponse>>>> {
    let service = CategoryService::new(state.service_context());
    let categories = service.list_categories(query.include_stats).await?;
    Ok(envelope(categories, "Categories retrieved successfully"))
}
