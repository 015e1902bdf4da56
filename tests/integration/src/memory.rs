//! In-memory repositories
//!
//! One store implements every repository port with the same observable
//! behavior as the PostgreSQL repositories: soft-deleted rows are hidden,
//! interaction inserts are idempotent, listings use the same ordering.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use forum_core::{
    Category, CategoryRepository, CategoryStats, DomainError, HealthProbe, Interaction,
    InteractionCounts, InteractionRepository, InteractionType, ModerationAction,
    ModerationRepository, Post, PostQuery, PostRepository, Reply, ReplyRepository, RepoResult,
    Snowflake, TargetType, User, UserRepository,
};
use parking_lot::Mutex;

type InteractionKey = (Snowflake, TargetType, Snowflake, InteractionType);

#[derive(Default)]
struct Tables {
    users: HashMap<Snowflake, User>,
    posts: HashMap<Snowflake, Post>,
    replies: HashMap<Snowflake, Reply>,
    interactions: HashMap<InteractionKey, Interaction>,
    categories: Vec<Category>,
    moderation: Vec<ModerationAction>,
}

/// Shared in-memory store backing every repository trait
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unreachable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with the identity collaborator
    pub fn insert_user(&self, user: User) {
        self.tables.lock().users.insert(user.id, user);
    }

    /// Insert a post directly, bypassing the services
    pub fn insert_post(&self, post: Post) {
        self.tables.lock().posts.insert(post.id, post);
    }

    /// Insert a reply directly, bypassing the services
    pub fn insert_reply(&self, reply: Reply) {
        self.tables.lock().replies.insert(reply.id, reply);
    }

    /// Stored post including soft-deleted ones
    pub fn stored_post(&self, id: Snowflake) -> Option<Post> {
        self.tables.lock().posts.get(&id).cloned()
    }

    /// Stored reply including soft-deleted ones
    pub fn stored_reply(&self, id: Snowflake) -> Option<Reply> {
        self.tables.lock().replies.get(&id).cloned()
    }

    /// Raw ledger rows for a target
    pub fn ledger_rows(&self, target_type: TargetType, target_id: Snowflake) -> Vec<Interaction> {
        self.tables
            .lock()
            .interactions
            .values()
            .filter(|i| i.target_type == target_type && i.target_id == target_id)
            .cloned()
            .collect()
    }

    pub fn moderation_entries(&self) -> Vec<ModerationAction> {
        self.tables.lock().moderation.clone()
    }

    /// Make readiness probes fail
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.tables.lock().users.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>> {
        let tables = self.tables.lock();
        Ok(ids.iter().filter_map(|id| tables.users.get(id).cloned()).collect())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self
            .tables
            .lock()
            .posts
            .get(&id)
            .filter(|p| !p.is_deleted)
            .cloned())
    }

    async fn list(&self, query: &PostQuery) -> RepoResult<Vec<Post>> {
        let tables = self.tables.lock();
        let mut posts: Vec<Post> = tables.posts.values().filter(|p| query.matches(p)).cloned().collect();
        posts.sort_by(|a, b| query.sort.compare(a, b));

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(0);
        Ok(posts.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self, query: &PostQuery) -> RepoResult<i64> {
        let tables = self.tables.lock();
        let total = tables.posts.values().filter(|p| query.matches(p)).count();
        Ok(i64::try_from(total).unwrap_or(i64::MAX))
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.posts.contains_key(&post.id) {
            return Err(DomainError::DatabaseError(format!("duplicate post id {}", post.id)));
        }
        tables.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        if let Some(stored) = self.tables.lock().posts.get_mut(&post.id).filter(|p| !p.is_deleted) {
            stored.title.clone_from(&post.title);
            stored.content.clone_from(&post.content);
            stored.category.clone_from(&post.category);
            stored.tags.clone_from(&post.tags);
            stored.last_activity_at = post.last_activity_at;
            stored.updated_at = post.updated_at;
        }
        Ok(())
    }

    async fn update_flags(&self, post: &Post) -> RepoResult<()> {
        if let Some(stored) = self.tables.lock().posts.get_mut(&post.id).filter(|p| !p.is_deleted) {
            stored.is_pinned = post.is_pinned;
            stored.is_locked = post.is_locked;
            stored.is_featured = post.is_featured;
            stored.updated_at = post.updated_at;
        }
        Ok(())
    }

    async fn soft_delete(&self, id: Snowflake) -> RepoResult<bool> {
        match self.tables.lock().posts.get_mut(&id).filter(|p| !p.is_deleted) {
            Some(post) => {
                post.is_deleted = true;
                post.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn increment_replies(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<()> {
        if let Some(post) = self.tables.lock().posts.get_mut(&id) {
            post.replies_count += 1;
            post.last_activity_at = post.last_activity_at.max(at);
        }
        Ok(())
    }

    async fn set_counts(&self, id: Snowflake, counts: &InteractionCounts) -> RepoResult<()> {
        if let Some(post) = self.tables.lock().posts.get_mut(&id) {
            post.likes_count = counts.likes;
            post.dislikes_count = counts.dislikes;
            if let Some(views) = counts.views {
                post.views_count = views;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reply>> {
        Ok(self
            .tables
            .lock()
            .replies
            .get(&id)
            .filter(|r| !r.is_deleted)
            .cloned())
    }

    async fn find_thread(&self, post_id: Snowflake, max_depth: i16) -> RepoResult<Vec<Reply>> {
        let tables = self.tables.lock();
        let mut replies: Vec<Reply> = tables
            .replies
            .values()
            .filter(|r| r.post_id == post_id && !r.is_deleted && r.depth <= max_depth)
            .cloned()
            .collect();
        replies.sort_by_key(|r| (r.depth, r.created_at, r.id));
        Ok(replies)
    }

    async fn create(&self, reply: &Reply) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.replies.contains_key(&reply.id) {
            return Err(DomainError::DatabaseError(format!("duplicate reply id {}", reply.id)));
        }
        tables.replies.insert(reply.id, reply.clone());
        Ok(())
    }

    async fn update(&self, reply: &Reply) -> RepoResult<()> {
        if let Some(stored) = self.tables.lock().replies.get_mut(&reply.id).filter(|r| !r.is_deleted) {
            stored.content.clone_from(&reply.content);
            stored.is_edited = reply.is_edited;
            stored.edited_at = reply.edited_at;
            stored.updated_at = reply.updated_at;
        }
        Ok(())
    }

    async fn soft_delete(&self, id: Snowflake) -> RepoResult<bool> {
        match self.tables.lock().replies.get_mut(&id).filter(|r| !r.is_deleted) {
            Some(reply) => {
                reply.is_deleted = true;
                reply.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_counts(&self, id: Snowflake, counts: &InteractionCounts) -> RepoResult<()> {
        if let Some(reply) = self.tables.lock().replies.get_mut(&id) {
            reply.likes_count = counts.likes;
            reply.dislikes_count = counts.dislikes;
        }
        Ok(())
    }
}

#[async_trait]
impl InteractionRepository for MemoryStore {
    async fn create(&self, interaction: &Interaction) -> RepoResult<bool> {
        let key = (
            interaction.user_id,
            interaction.target_type,
            interaction.target_id,
            interaction.interaction_type,
        );
        let mut tables = self.tables.lock();
        if tables.interactions.contains_key(&key) {
            return Ok(false);
        }
        tables.interactions.insert(key, interaction.clone());
        Ok(true)
    }

    async fn delete(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_id: Snowflake,
        interaction_type: InteractionType,
    ) -> RepoResult<bool> {
        let key = (user_id, target_type, target_id, interaction_type);
        Ok(self.tables.lock().interactions.remove(&key).is_some())
    }

    async fn count_by_type(
        &self,
        target_type: TargetType,
        target_id: Snowflake,
    ) -> RepoResult<Vec<(InteractionType, i64)>> {
        let tables = self.tables.lock();
        let mut counts: HashMap<InteractionType, i64> = HashMap::new();
        for (_, tt, tid, kind) in tables.interactions.keys() {
            if *tt == target_type && *tid == target_id {
                *counts.entry(*kind).or_default() += 1;
            }
        }
        let mut rows: Vec<_> = counts.into_iter().collect();
        rows.sort();
        Ok(rows)
    }

    async fn find_for_user(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, InteractionType)>> {
        let tables = self.tables.lock();
        let mut rows: Vec<_> = tables
            .interactions
            .keys()
            .filter(|(uid, tt, tid, _)| *uid == user_id && *tt == target_type && target_ids.contains(tid))
            .map(|(_, _, tid, kind)| (*tid, *kind))
            .collect();
        rows.sort();
        Ok(rows)
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list(&self, active_only: bool) -> RepoResult<Vec<Category>> {
        let tables = self.tables.lock();
        let mut categories: Vec<Category> = tables
            .categories
            .iter()
            .filter(|c| c.is_active || !active_only)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.display_order.cmp(&b.display_order).then_with(|| a.name.cmp(&b.name)));
        Ok(categories)
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        Ok(self.tables.lock().categories.iter().find(|c| c.name == name).cloned())
    }

    async fn upsert(&self, category: &Category) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        match tables.categories.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => {
                existing.description.clone_from(&category.description);
                existing.color.clone_from(&category.color);
                existing.icon.clone_from(&category.icon);
                existing.display_order = category.display_order;
                existing.is_active = category.is_active;
            }
            None => tables.categories.push(category.clone()),
        }
        Ok(())
    }

    async fn stats(&self) -> RepoResult<Vec<(String, CategoryStats)>> {
        let tables = self.tables.lock();
        let mut stats: HashMap<String, CategoryStats> = HashMap::new();
        for post in tables.posts.values().filter(|p| !p.is_deleted) {
            let entry = stats.entry(post.category.clone()).or_default();
            entry.post_count += 1;
            entry.last_activity_at = entry.last_activity_at.max(Some(post.last_activity_at));
        }
        Ok(stats.into_iter().collect())
    }
}

#[async_trait]
impl ModerationRepository for MemoryStore {
    async fn create(&self, action: &ModerationAction) -> RepoResult<()> {
        self.tables.lock().moderation.push(action.clone());
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<ModerationAction>> {
        let tables = self.tables.lock();
        let mut actions = tables.moderation.clone();
        actions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(actions.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(i64::try_from(self.tables.lock().moderation.len()).unwrap_or(i64::MAX))
    }
}

#[async_trait]
impl HealthProbe for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("store unreachable".to_string()));
        }
        Ok(())
    }
}
