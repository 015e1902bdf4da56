//! Post service
//!
//! Listing, fetch, create, edit, soft delete and staff flags for posts.
//! Every mutation passes through the content rules in `forum_core::rules`.

use chrono::Utc;
use forum_core::entities::normalize_tags;
use forum_core::{
    rules, AuthorSummary, DomainError, ModerationActionType, PageMeta, Post, PostQuery, Snowflake,
    User,
};
use tracing::{debug, info, instrument};

use crate::dto::{
    CreatePostRequest, PagedResponse, PostDetailResponse, PostResponse, UpdatePostFlagsRequest,
    UpdatePostRequest,
};

use super::category::{resolve_display, CategoryService};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;
use super::interaction::InteractionService;
use super::moderation::ModerationService;
use super::reply::ReplyService;

pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of live posts. Pages past the end are empty, not errors.
    #[instrument(skip(self))]
    pub async fn list_posts(&self, query: &PostQuery) -> ServiceResult<PagedResponse<PostResponse>> {
        let repo = self.ctx.post_repo();
        let total = repo.count(query).await?;
        let posts = if query.offset() < total {
            repo.list(query).await?
        } else {
            Vec::new()
        };

        let authors = IdentityService::new(self.ctx)
            .authors(posts.iter().map(|p| p.author_id).collect())
            .await?;
        let displays = CategoryService::new(self.ctx).display_map().await?;

        let items = posts
            .iter()
            .map(|post| {
                let author = authors
                    .get(&post.author_id)
                    .cloned()
                    .unwrap_or_else(|| AuthorSummary::unknown(post.author_id));
                PostResponse::new(post, author, resolve_display(&displays, &post.category))
            })
            .collect();

        Ok(PagedResponse::new(items, PageMeta::new(query.page, query.limit, total)))
    }

    /// Fetch a post with its reply forest, recording a view for signed-in callers
    #[instrument(skip(self, viewer), fields(viewer_id = ?viewer.map(|u| u.id)))]
    pub async fn get_post(
        &self,
        viewer: Option<&User>,
        post_id: Snowflake,
    ) -> ServiceResult<PostDetailResponse> {
        let mut post = self.find_live(post_id).await?;

        if let Some(counts) = InteractionService::new(self.ctx)
            .record_view(viewer, post_id)
            .await
        {
            post.apply_counts(&counts);
        }

        let replies = ReplyService::new(self.ctx).build_thread(post_id).await?;
        let post = self.to_response(&post).await?;

        Ok(PostDetailResponse { post, replies })
    }

    #[instrument(skip(self, user, req), fields(user_id = %user.id))]
    pub async fn create_post(
        &self,
        user: &User,
        req: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        rules::ensure_can_create(user, Utc::now())?;

        let title = clean_title(&req.title)?;
        let content = clean_content(&req.content)?;
        let category = CategoryService::new(self.ctx)
            .require_active(&req.category)
            .await?;

        let post = Post::new(
            self.ctx.generate_id(),
            user.id,
            title,
            content,
            category.name.clone(),
            req.tags,
        );
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author_id = %user.id, category = %post.category, "Post created");

        Ok(PostResponse::new(&post, AuthorSummary::from(user), category.display()))
    }

    /// Edit title, content, category or tags. Author or staff; locked posts are staff-only.
    #[instrument(skip(self, user, req), fields(user_id = %user.id))]
    pub async fn update_post(
        &self,
        user: &User,
        post_id: Snowflake,
        req: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self.find_live(post_id).await?;
        rules::ensure_can_edit(user, post.author_id, post.is_locked, Utc::now())
            .inspect_err(|e| debug!(post_id = %post_id, reason = %e, "Post edit denied"))?;

        if req.is_empty() {
            return Err(ServiceError::validation("No fields to update"));
        }

        if let Some(title) = &req.title {
            post.title = clean_title(title)?;
        }
        if let Some(content) = &req.content {
            post.content = clean_content(content)?;
        }
        if let Some(category) = &req.category {
            post.category = CategoryService::new(self.ctx)
                .require_active(category)
                .await?
                .name;
        }
        if let Some(tags) = req.tags {
            post.tags = normalize_tags(tags);
        }

        post.touch();
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post_id, editor_id = %user.id, "Post updated");
        self.to_response(&post).await
    }

    /// Soft delete. Author or staff; staff deletes of others' posts are logged.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn delete_post(&self, user: &User, post_id: Snowflake) -> ServiceResult<()> {
        let post = self.find_live(post_id).await?;
        rules::ensure_can_delete(user, post.author_id)
            .inspect_err(|e| debug!(post_id = %post_id, reason = %e, "Post delete denied"))?;

        if !self.ctx.post_repo().soft_delete(post_id).await? {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        if rules::is_moderated_delete(user.id, post.author_id) {
            ModerationService::new(self.ctx)
                .log_deletion(user, ModerationActionType::DeletePost, post_id)
                .await;
        }

        info!(post_id = %post_id, deleted_by = %user.id, "Post deleted");
        Ok(())
    }

    /// Pin, lock or feature a post. Staff only; not written to the moderation log.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn update_flags(
        &self,
        user: &User,
        post_id: Snowflake,
        req: UpdatePostFlagsRequest,
    ) -> ServiceResult<PostResponse> {
        rules::ensure_can_moderate(user, Utc::now())?;
        let mut post = self.find_live(post_id).await?;

        if let Some(pinned) = req.is_pinned {
            post.is_pinned = pinned;
        }
        if let Some(locked) = req.is_locked {
            post.is_locked = locked;
        }
        if let Some(featured) = req.is_featured {
            post.is_featured = featured;
        }
        post.updated_at = Utc::now();

        self.ctx.post_repo().update_flags(&post).await?;

        info!(
            post_id = %post_id,
            moderator_id = %user.id,
            is_pinned = post.is_pinned,
            is_locked = post.is_locked,
            is_featured = post.is_featured,
            "Post flags updated"
        );
        self.to_response(&post).await
    }

    async fn find_live(&self, post_id: Snowflake) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    async fn to_response(&self, post: &Post) -> ServiceResult<PostResponse> {
        let author = IdentityService::new(self.ctx)
            .authors(vec![post.author_id])
            .await?
            .remove(&post.author_id)
            .unwrap_or_else(|| AuthorSummary::unknown(post.author_id));
        let category = CategoryService::new(self.ctx)
            .display_for(&post.category)
            .await?;
        Ok(PostResponse::new(post, author, category))
    }
}

fn clean_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    let len = title.chars().count();
    if !(3..=200).contains(&len) {
        return Err(DomainError::Validation(
            "Title must be 3-200 characters".to_string(),
        ));
    }
    Ok(title.to_string())
}

fn clean_content(content: &str) -> Result<String, DomainError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("Content must not be blank".to_string()));
    }
    if trimmed.chars().count() > 50_000 {
        return Err(DomainError::Validation(
            "Content must be 1-50000 characters".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
