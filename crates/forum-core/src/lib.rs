//! # forum-core
//!
//! Domain layer for the community forum: entities, value objects, content rules,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod rules;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuthorSummary, Category, CategoryDisplay, CategorySeed, CategoryStats, Interaction,
    InteractionCounts, ModerationAction, ModerationActionType, Post, Reply, User,
    DEFAULT_CATEGORIES, MAX_REPLY_DEPTH, MAX_TAGS,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, HealthProbe, InteractionRepository, ModerationRepository, PostRepository,
    ReplyRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    InteractionType, OrphanPolicy, PageMeta, PostQuery, PostSort, Snowflake, SnowflakeGenerator,
    SnowflakeParseError, TargetType, UserRole,
};
