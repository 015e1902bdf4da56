//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod interaction;
mod moderation_action;
mod post;
mod reply;
mod user;

pub use category::{CategoryModel, CategoryStatsModel};
pub use interaction::{InteractionCountModel, InteractionModel, UserInteractionModel};
pub use moderation_action::ModerationActionModel;
pub use post::PostModel;
pub use reply::ReplyModel;
pub use user::UserModel;
