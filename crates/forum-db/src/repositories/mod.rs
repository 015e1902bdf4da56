//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod error;
mod health;
mod interaction;
mod moderation;
mod post;
mod reply;
mod user;

pub use category::PgCategoryRepository;
pub use health::PgHealthProbe;
pub use interaction::PgInteractionRepository;
pub use moderation::PgModerationRepository;
pub use post::PgPostRepository;
pub use reply::PgReplyRepository;
pub use user::PgUserRepository;
