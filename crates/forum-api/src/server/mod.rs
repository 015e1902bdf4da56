//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use forum_common::{AppConfig, AppError, JwtService};
use forum_core::SnowflakeGenerator;
use forum_db::{
    create_pool, run_migrations, DatabaseConfig, PgCategoryRepository, PgHealthProbe,
    PgInteractionRepository, PgModerationRepository, PgPostRepository, PgReplyRepository,
    PgUserRepository,
};
use forum_service::{CategoryService, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::handlers;
use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes bypass the rate limiter; unknown paths get a 404 envelope.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = api.merge(health_routes()).fallback(handlers::not_found);
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    Ok(router.with_state(state))
}

/// Connect to PostgreSQL, wire the repositories and seed the category catalog
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if let Some(dir) = &config.database.migrations_dir {
        info!(dir = %dir, "Running database migrations");
        run_migrations(&pool, dir)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .reply_repo(Arc::new(PgReplyRepository::new(pool.clone())))
        .interaction_repo(Arc::new(PgInteractionRepository::new(pool.clone())))
        .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
        .moderation_repo(Arc::new(PgModerationRepository::new(pool.clone())))
        .health_probe(Arc::new(PgHealthProbe::new(pool)))
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .orphan_policy(config.forum.orphan_replies)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    if config.forum.seed_categories {
        let seeded = CategoryService::new(&service_context)
            .ensure_defaults()
            .await
            .map_err(AppError::from)?;
        info!(count = seeded, "Default categories ensured");
    }

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
