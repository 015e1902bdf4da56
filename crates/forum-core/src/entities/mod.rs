//! Domain entities - core business objects

mod category;
mod interaction;
mod moderation_action;
mod post;
mod reply;
mod user;

pub use category::{Category, CategoryDisplay, CategorySeed, CategoryStats, DEFAULT_CATEGORIES};
pub use interaction::{Interaction, InteractionCounts};
pub use moderation_action::{ModerationAction, ModerationActionType};
pub use post::{normalize_tags, Post, MAX_TAGS};
pub use reply::{Reply, MAX_REPLY_DEPTH};
pub use user::{AuthorSummary, User};
