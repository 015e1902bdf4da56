//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{categories, health, interactions, moderation, posts, replies};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(reply_routes())
        .merge(interaction_routes())
        .merge(category_routes())
        .merge(moderation_routes())
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:post_id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/:post_id/flags", patch(posts::update_flags))
        .route("/posts/:post_id/replies", get(replies::get_thread))
}

/// Reply routes
fn reply_routes() -> Router<AppState> {
    Router::new()
        .route("/replies", post(replies::create_reply))
        .route(
            "/replies/:reply_id",
            put(replies::update_reply).delete(replies::delete_reply),
        )
}

/// Interaction routes
fn interaction_routes() -> Router<AppState> {
    Router::new().route(
        "/interactions",
        get(interactions::list_user_interactions)
            .post(interactions::add_interaction)
            .delete(interactions::remove_interaction),
    )
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new().route("/categories", get(categories::list_categories))
}

/// Moderation routes
fn moderation_routes() -> Router<AppState> {
    Router::new().route("/moderation/actions", get(moderation::list_actions))
}
