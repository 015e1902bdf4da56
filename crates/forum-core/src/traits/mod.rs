//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    CategoryRepository, HealthProbe, InteractionRepository, ModerationRepository, PostRepository,
    ReplyRepository, RepoResult, UserRepository,
};
