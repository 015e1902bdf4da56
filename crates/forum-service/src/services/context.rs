//! Service context - dependency container for services
//!
//! Holds every repository port, the credential verifier, the id generator
//! and forum settings. Storage backends are injected at construction time.

use std::sync::Arc;

use forum_common::auth::JwtService;
use forum_core::traits::{
    CategoryRepository, HealthProbe, InteractionRepository, ModerationRepository, PostRepository,
    ReplyRepository, UserRepository,
};
use forum_core::{OrphanPolicy, Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap: every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    interaction_repo: Arc<dyn InteractionRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    moderation_repo: Arc<dyn ModerationRepository>,
    health_probe: Arc<dyn HealthProbe>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Settings
    orphan_policy: OrphanPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
        interaction_repo: Arc<dyn InteractionRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        moderation_repo: Arc<dyn ModerationRepository>,
        health_probe: Arc<dyn HealthProbe>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        orphan_policy: OrphanPolicy,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            reply_repo,
            interaction_repo,
            category_repo,
            moderation_repo,
            health_probe,
            jwt_service,
            snowflake_generator,
            orphan_policy,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    pub fn interaction_repo(&self) -> &dyn InteractionRepository {
        self.interaction_repo.as_ref()
    }

    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    pub fn moderation_repo(&self) -> &dyn ModerationRepository {
        self.moderation_repo.as_ref()
    }

    /// Store reachability probe for readiness checks
    pub fn health_probe(&self) -> &dyn HealthProbe {
        self.health_probe.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    // === Settings ===

    pub fn orphan_policy(&self) -> OrphanPolicy {
        self.orphan_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .field("orphan_policy", &self.orphan_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    interaction_repo: Option<Arc<dyn InteractionRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    moderation_repo: Option<Arc<dyn ModerationRepository>>,
    health_probe: Option<Arc<dyn HealthProbe>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    orphan_policy: OrphanPolicy,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn interaction_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.interaction_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn moderation_repo(mut self, repo: Arc<dyn ModerationRepository>) -> Self {
        self.moderation_repo = Some(repo);
        self
    }

    pub fn health_probe(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.health_probe = Some(probe);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Defaults to [`OrphanPolicy::Promote`]
    pub fn orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.post_repo.ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.reply_repo.ok_or_else(|| ServiceError::validation("reply_repo is required"))?,
            self.interaction_repo
                .ok_or_else(|| ServiceError::validation("interaction_repo is required"))?,
            self.category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.moderation_repo
                .ok_or_else(|| ServiceError::validation("moderation_repo is required"))?,
            self.health_probe
                .ok_or_else(|| ServiceError::validation("health_probe is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.orphan_policy,
        ))
    }
}
