//! Content rules - pure authorization and state-transition predicates
//!
//! Each `ensure_*` function evaluates its checks in a fixed order and returns
//! the first one that fails. Nothing here touches storage.

use chrono::{DateTime, Utc};

use crate::entities::{User, MAX_REPLY_DEPTH};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

type RuleResult = Result<(), DomainError>;

/// A user may create posts and replies unless an active ban applies
pub fn ensure_can_create(user: &User, now: DateTime<Utc>) -> RuleResult {
    if user.is_banned_at(now) {
        return Err(DomainError::UserBanned);
    }
    Ok(())
}

/// Author or staff; locked content is staff-only
pub fn ensure_can_edit(
    user: &User,
    author_id: Snowflake,
    locked: bool,
    now: DateTime<Utc>,
) -> RuleResult {
    ensure_can_create(user, now)?;
    ensure_owner_or_staff(user, author_id)?;
    if locked && !user.is_staff() {
        return Err(DomainError::ContentLocked);
    }
    Ok(())
}

/// Author or staff. Locking does not prevent deletion.
pub fn ensure_can_delete(user: &User, author_id: Snowflake) -> RuleResult {
    ensure_owner_or_staff(user, author_id)
}

/// Replying to a locked post is staff-only
pub fn ensure_can_reply(user: &User, post_locked: bool, now: DateTime<Utc>) -> RuleResult {
    ensure_can_create(user, now)?;
    if post_locked && !user.is_staff() {
        return Err(DomainError::ContentLocked);
    }
    Ok(())
}

/// Pin, lock and feature flags are staff-only
pub fn ensure_can_moderate(user: &User, now: DateTime<Utc>) -> RuleResult {
    ensure_can_create(user, now)?;
    if !user.is_staff() {
        return Err(DomainError::StaffOnly);
    }
    Ok(())
}

/// Depth of a new reply under a parent at `parent_depth` (or top-level for `None`).
///
/// Creation never clamps: anything past [`MAX_REPLY_DEPTH`] is rejected.
pub fn child_depth(parent_depth: Option<i16>) -> Result<i16, DomainError> {
    let depth = parent_depth.map_or(0, |d| d + 1);
    if depth > MAX_REPLY_DEPTH {
        return Err(DomainError::ReplyTooDeep { max: MAX_REPLY_DEPTH });
    }
    Ok(depth)
}

/// Whether deleting this content must be written to the moderation log
#[inline]
pub fn is_moderated_delete(actor_id: Snowflake, author_id: Snowflake) -> bool {
    actor_id != author_id
}

fn ensure_owner_or_staff(user: &User, author_id: Snowflake) -> RuleResult {
    if user.id == author_id || user.is_staff() {
        Ok(())
    } else {
        Err(DomainError::NotContentAuthor)
    }
}
