//! Value objects - immutable types that represent domain concepts

mod interaction_kind;
mod orphan_policy;
mod post_query;
mod role;
mod snowflake;

pub use interaction_kind::{InteractionType, TargetType};
pub use orphan_policy::OrphanPolicy;
pub use post_query::{
    PageMeta, PostQuery, PostSort, ALL_CATEGORIES, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use role::UserRole;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
