//! Reply service
//!
//! Create, edit, soft delete and thread retrieval for replies. Replies nest
//! at most `MAX_REPLY_DEPTH` levels below the post; creation past that is
//! rejected outright rather than clamped.

use chrono::Utc;
use forum_core::{
    rules, AuthorSummary, DomainError, ModerationActionType, Post, Reply, Snowflake, User,
    MAX_REPLY_DEPTH,
};
use tracing::{debug, info, instrument};

use crate::dto::{CreateReplyRequest, ReplyResponse, UpdateReplyRequest};

use super::context::ServiceContext;
use super::counters::CounterService;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;
use super::moderation::ModerationService;
use super::reply_tree::build_reply_tree;

pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a reply under a post, optionally beneath another reply.
    ///
    /// Checks run in order: ban, post exists, post lock, parent exists,
    /// parent on the same post, depth. Nothing is written until all pass.
    #[instrument(skip(self, user, req), fields(user_id = %user.id, post_id = %req.post_id))]
    pub async fn create_reply(
        &self,
        user: &User,
        req: CreateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        let now = Utc::now();
        rules::ensure_can_create(user, now)?;

        let post = self.find_post(req.post_id).await?;
        rules::ensure_can_reply(user, post.is_locked, now)?;

        let parent_depth = match req.parent_reply_id {
            Some(parent_id) => {
                let parent = self.find_live(parent_id).await?;
                if parent.post_id != post.id {
                    return Err(DomainError::ParentReplyMismatch.into());
                }
                Some(parent.depth)
            }
            None => None,
        };
        let depth = rules::child_depth(parent_depth)?;

        let content = req.content.trim();
        if content.is_empty() {
            return Err(ServiceError::validation("Content must not be blank"));
        }

        let reply = Reply::new(
            self.ctx.generate_id(),
            post.id,
            user.id,
            req.parent_reply_id,
            depth,
            content.to_string(),
        );
        self.ctx.reply_repo().create(&reply).await?;
        CounterService::new(self.ctx)
            .record_reply(post.id, reply.created_at)
            .await?;

        info!(reply_id = %reply.id, post_id = %post.id, depth, "Reply created");

        Ok(ReplyResponse::leaf(reply, AuthorSummary::from(user)))
    }

    /// Edit a reply's content. Author or staff; replies on locked posts are staff-only.
    #[instrument(skip(self, user, req), fields(user_id = %user.id))]
    pub async fn update_reply(
        &self,
        user: &User,
        reply_id: Snowflake,
        req: UpdateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        let mut reply = self.find_live(reply_id).await?;
        let post = self.find_post(reply.post_id).await?;
        rules::ensure_can_edit(user, reply.author_id, post.is_locked, Utc::now())?;

        let content = req.content.trim();
        if content.is_empty() {
            return Err(ServiceError::validation("Content must not be blank"));
        }

        reply.edit(content.to_string());
        self.ctx.reply_repo().update(&reply).await?;

        info!(reply_id = %reply_id, editor_id = %user.id, "Reply updated");

        let author = if reply.is_author(user.id) {
            AuthorSummary::from(user)
        } else {
            IdentityService::new(self.ctx)
                .authors(vec![reply.author_id])
                .await?
                .remove(&reply.author_id)
                .unwrap_or_else(|| AuthorSummary::unknown(reply.author_id))
        };
        Ok(ReplyResponse::leaf(reply, author))
    }

    /// Soft delete. The post's `replies_count` is left unchanged.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn delete_reply(&self, user: &User, reply_id: Snowflake) -> ServiceResult<()> {
        let reply = self.find_live(reply_id).await?;
        rules::ensure_can_delete(user, reply.author_id)?;

        if !self.ctx.reply_repo().soft_delete(reply_id).await? {
            return Err(DomainError::ReplyNotFound(reply_id).into());
        }

        if rules::is_moderated_delete(user.id, reply.author_id) {
            ModerationService::new(self.ctx)
                .log_deletion(user, ModerationActionType::DeleteReply, reply_id)
                .await;
        }

        info!(reply_id = %reply_id, post_id = %reply.post_id, deleted_by = %user.id, "Reply deleted");
        Ok(())
    }

    /// Reply forest of a live post
    #[instrument(skip(self))]
    pub async fn get_thread(&self, post_id: Snowflake) -> ServiceResult<Vec<ReplyResponse>> {
        self.find_post(post_id).await?;
        self.build_thread(post_id).await
    }

    /// Fetch replies down to `MAX_REPLY_DEPTH` and assemble the forest.
    /// The caller is responsible for checking that the post is live.
    pub(crate) async fn build_thread(&self, post_id: Snowflake) -> ServiceResult<Vec<ReplyResponse>> {
        let replies = self
            .ctx
            .reply_repo()
            .find_thread(post_id, MAX_REPLY_DEPTH)
            .await?;
        let fetched = replies.len();

        let authors = IdentityService::new(self.ctx)
            .authors(replies.iter().map(|r| r.author_id).collect())
            .await?;
        let forest = build_reply_tree(replies, &authors, self.ctx.orphan_policy());

        debug!(
            post_id = %post_id,
            fetched,
            roots = forest.len(),
            policy = ?self.ctx.orphan_policy(),
            "Reply tree built"
        );
        Ok(forest)
    }

    async fn find_live(&self, reply_id: Snowflake) -> ServiceResult<Reply> {
        self.ctx
            .reply_repo()
            .find_by_id(reply_id)
            .await?
            .ok_or_else(|| DomainError::ReplyNotFound(reply_id).into())
    }

    async fn find_post(&self, post_id: Snowflake) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }
}
