//! Interaction ledger service
//!
//! Likes, dislikes, bookmarks and views as one row per
//! `(user, target_type, target_id, kind)`. Likes and dislikes on the same
//! target are mutually exclusive. Duplicate inserts are absorbed, never
//! reported as errors, and every mutation is followed by a counter refresh.

use std::collections::{BTreeMap, BTreeSet};

use forum_core::{
    DomainError, Interaction, InteractionCounts, InteractionType, Snowflake, TargetType, User,
};
use tracing::{info, instrument, warn};

use crate::dto::{AddInteractionResponse, RemoveInteractionResponse, UserInteractionsResponse};

use super::context::ServiceContext;
use super::counters::CounterService;
use super::error::ServiceResult;

pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a like, dislike or bookmark.
    ///
    /// A like removes the user's dislike on the same target and vice versa.
    /// Repeating an interaction the user already holds succeeds with
    /// `is_new_interaction = false`.
    #[instrument(skip(self))]
    pub async fn add_interaction(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_id: Snowflake,
        interaction_type: InteractionType,
    ) -> ServiceResult<AddInteractionResponse> {
        ensure_user_action(interaction_type)?;
        self.ensure_target_live(target_type, target_id).await?;

        let ledger = self.ctx.interaction_repo();

        // Opposite kind goes first so the pair never coexists
        if let Some(opposite) = interaction_type.opposite() {
            ledger.delete(user_id, target_type, target_id, opposite).await?;
        }

        let interaction = Interaction::new(user_id, target_type, target_id, interaction_type);
        let is_new = ledger.create(&interaction).await?;

        let counts = CounterService::new(self.ctx)
            .refresh_counters(target_type, target_id)
            .await?;

        info!(
            user_id = %user_id,
            target_type = %target_type,
            target_id = %target_id,
            interaction_type = %interaction_type,
            is_new,
            "Interaction added"
        );

        Ok(AddInteractionResponse {
            is_new_interaction: is_new,
            counts,
        })
    }

    /// Remove an interaction. Removing one the user does not hold is a no-op.
    ///
    /// The target may already be soft-deleted; its ledger rows stay removable.
    #[instrument(skip(self))]
    pub async fn remove_interaction(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_id: Snowflake,
        interaction_type: InteractionType,
    ) -> ServiceResult<RemoveInteractionResponse> {
        ensure_user_action(interaction_type)?;

        let was_removed = self
            .ctx
            .interaction_repo()
            .delete(user_id, target_type, target_id, interaction_type)
            .await?;

        let counts = CounterService::new(self.ctx)
            .refresh_counters(target_type, target_id)
            .await?;

        info!(
            user_id = %user_id,
            target_type = %target_type,
            target_id = %target_id,
            interaction_type = %interaction_type,
            was_removed,
            "Interaction removed"
        );

        Ok(RemoveInteractionResponse { was_removed, counts })
    }

    /// Which kinds the user holds against each of `target_ids`.
    /// Targets with no interactions are absent from the map.
    #[instrument(skip(self, target_ids), fields(count = target_ids.len()))]
    pub async fn list_user_interactions(
        &self,
        user_id: Snowflake,
        target_type: TargetType,
        target_ids: &[Snowflake],
    ) -> ServiceResult<UserInteractionsResponse> {
        if target_ids.is_empty() {
            return Ok(UserInteractionsResponse::new());
        }

        let rows = self
            .ctx
            .interaction_repo()
            .find_for_user(user_id, target_type, target_ids)
            .await?;

        let mut held: BTreeMap<Snowflake, BTreeSet<InteractionType>> = BTreeMap::new();
        for (target_id, kind) in rows {
            held.entry(target_id).or_default().insert(kind);
        }

        Ok(held
            .into_iter()
            .map(|(id, kinds)| {
                (
                    id.to_string(),
                    kinds.into_iter().map(|k| k.as_str().to_string()).collect(),
                )
            })
            .collect())
    }

    /// Best-effort view of a post. Anonymous viewers are ignored and failures
    /// are logged, never returned. Yields fresh counters when a new view landed.
    #[instrument(skip(self, viewer), fields(viewer_id = ?viewer.map(|u| u.id)))]
    pub async fn record_view(
        &self,
        viewer: Option<&User>,
        post_id: Snowflake,
    ) -> Option<InteractionCounts> {
        let viewer = viewer?;

        match self.try_record_view(viewer.id, post_id).await {
            Ok(counts) => counts,
            Err(e) => {
                warn!(post_id = %post_id, user_id = %viewer.id, error = %e, "Failed to record view");
                None
            }
        }
    }

    async fn try_record_view(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
    ) -> ServiceResult<Option<InteractionCounts>> {
        let view = Interaction::new(user_id, TargetType::Post, post_id, InteractionType::View);
        if !self.ctx.interaction_repo().create(&view).await? {
            return Ok(None);
        }

        let counts = CounterService::new(self.ctx)
            .refresh_counters(TargetType::Post, post_id)
            .await?;
        Ok(Some(counts))
    }

    async fn ensure_target_live(
        &self,
        target_type: TargetType,
        target_id: Snowflake,
    ) -> ServiceResult<()> {
        let exists = match target_type {
            TargetType::Post => self.ctx.post_repo().find_by_id(target_id).await?.is_some(),
            TargetType::Reply => self.ctx.reply_repo().find_by_id(target_id).await?.is_some(),
        };

        if exists {
            Ok(())
        } else {
            Err(DomainError::TargetNotFound {
                target_type,
                id: target_id,
            }
            .into())
        }
    }
}

fn ensure_user_action(kind: InteractionType) -> Result<(), DomainError> {
    if kind == InteractionType::View {
        return Err(DomainError::InvalidInteractionType(kind.as_str().to_string()));
    }
    Ok(())
}
