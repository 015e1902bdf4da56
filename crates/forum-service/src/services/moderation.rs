//! Moderation log service
//!
//! Deletes performed by anyone other than the content's author are recorded
//! here. Logging never blocks or rolls back the delete itself.

use forum_core::value_objects::MAX_PAGE_SIZE;
use forum_core::{DomainError, ModerationAction, ModerationActionType, PageMeta, Snowflake, User};
use tracing::{info, instrument, warn};

use crate::dto::{ModerationActionResponse, PagedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append a log entry for a moderated delete; failures are only logged
    #[instrument(skip(self, actor), fields(moderator_id = %actor.id))]
    pub async fn log_deletion(
        &self,
        actor: &User,
        action_type: ModerationActionType,
        target_id: Snowflake,
    ) {
        let action = ModerationAction::new(
            self.ctx.generate_id(),
            actor.id,
            action_type,
            target_id,
            format!("Removed by {}", actor.role),
        );

        match self.ctx.moderation_repo().create(&action).await {
            Ok(()) => info!(
                action_id = %action.id,
                action_type = %action_type,
                target_id = %target_id,
                "Moderation action logged"
            ),
            Err(e) => warn!(
                action_type = %action_type,
                target_id = %target_id,
                error = %e,
                "Failed to log moderation action"
            ),
        }
    }

    /// Newest entries first. Staff only.
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.id))]
    pub async fn list_actions(
        &self,
        viewer: &User,
        page: i64,
        limit: i64,
    ) -> ServiceResult<PagedResponse<ModerationActionResponse>> {
        if !viewer.is_staff() {
            return Err(DomainError::StaffOnly.into());
        }

        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1).saturating_mul(limit);

        let repo = self.ctx.moderation_repo();
        let total = repo.count().await?;
        let actions = repo.list(limit, offset).await?;

        Ok(PagedResponse::new(
            actions.iter().map(ModerationActionResponse::from).collect(),
            PageMeta::new(page, limit, total),
        ))
    }
}
