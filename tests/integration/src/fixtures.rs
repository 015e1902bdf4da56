//! Test fixtures and data generators
//!
//! Provides reusable users, posts and replies for integration tests.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, Utc};
use forum_core::{Post, Reply, Snowflake, User, UserRole};
use serde_json::{json, Value};

/// Fixture ids stay far below any generated Snowflake
static COUNTER: AtomicI64 = AtomicI64::new(1_000);

/// Get a unique id for fixture data
pub fn unique_id() -> Snowflake {
    Snowflake::new(COUNTER.fetch_add(1, Ordering::SeqCst))
}

pub fn user(role: UserRole) -> User {
    let id = unique_id();
    User::new(id, format!("{}-{id}", role.as_str()), role)
}

pub fn subscriber() -> User {
    user(UserRole::Subscriber)
}

pub fn moderator() -> User {
    user(UserRole::Moderator)
}

pub fn admin() -> User {
    user(UserRole::Admin)
}

/// Permanently banned user with the given role
pub fn banned(role: UserRole) -> User {
    let mut user = user(role);
    user.is_banned = true;
    user
}

/// Ban that ended an hour ago
pub fn expired_ban() -> User {
    let mut user = subscriber();
    user.is_banned = true;
    user.banned_until = Some(Utc::now() - Duration::hours(1));
    user
}

/// A live post in `general`
pub fn post_by(author: &User) -> Post {
    Post::new(
        unique_id(),
        author.id,
        "Fixture post".to_string(),
        "Fixture content".to_string(),
        "general".to_string(),
        vec![],
    )
}

/// Reply stored directly, with `created_at` offset by `offset_secs` from now
pub fn reply_at(post: &Post, parent: Option<&Reply>, author: &User, offset_secs: i64) -> Reply {
    let depth = parent.map_or(0, |p| p.depth + 1);
    let mut reply = Reply::new(
        unique_id(),
        post.id,
        author.id,
        parent.map(|p| p.id),
        depth,
        format!("reply at depth {depth}"),
    );
    reply.created_at = Utc::now() + Duration::seconds(offset_secs);
    reply.updated_at = reply.created_at;
    reply
}

/// Body for `POST /posts`
pub fn create_post_body(title: &str, category: &str) -> Value {
    json!({
        "title": title,
        "content": format!("Content of {title}"),
        "category": category,
        "tags": ["Rust", " rust ", "Forum"],
    })
}

/// Body for `POST /replies`
pub fn create_reply_body(post_id: &str, parent_reply_id: Option<&str>, content: &str) -> Value {
    json!({
        "post_id": post_id,
        "parent_reply_id": parent_reply_id,
        "content": content,
    })
}

/// Body for `POST /interactions` and `DELETE /interactions`
pub fn interaction_body(target_type: &str, target_id: &str, interaction_type: &str) -> Value {
    json!({
        "target_type": target_type,
        "target_id": target_id,
        "interaction_type": interaction_type,
    })
}
