//! Entity <-> Model mappers
//!
//! Rows whose text columns hold enum values map through `TryFrom`; a value the
//! domain does not recognize surfaces as a database error rather than a panic.

mod category;
mod interaction;
mod moderation_action;
mod post;
mod reply;
mod user;

pub(crate) use interaction::parse_interaction_type;

use forum_core::DomainError;

pub(crate) fn corrupt_column(column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("unrecognized {column} value '{value}'"))
}
