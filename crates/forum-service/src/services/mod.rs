//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates content rules, repositories and DTO mapping.

pub mod category;
pub mod context;
pub mod counters;
pub mod error;
pub mod identity;
pub mod interaction;
pub mod moderation;
pub mod post;
pub mod reply;
pub mod reply_tree;

// Re-export all services for convenience
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use counters::CounterService;
pub use error::{ServiceError, ServiceResult};
pub use identity::IdentityService;
pub use interaction::InteractionService;
pub use moderation::ModerationService;
pub use post::PostService;
pub use reply::ReplyService;
pub use reply_tree::build_reply_tree;
