//! Counter maintainer
//!
//! Post and reply counters are a cache over the interaction ledger. They are
//! always re-derived from ledger row counts, never incremented in place, so a
//! refresh after any race converges on the true value. `replies_count` is the
//! one exception: it only ever grows, and soft-deleted replies stay counted.

use chrono::{DateTime, Utc};
use forum_core::{InteractionCounts, InteractionType, Snowflake, TargetType};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct CounterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CounterService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Recount the ledger for one target and write the result back to it
    #[instrument(skip(self))]
    pub async fn refresh_counters(
        &self,
        target_type: TargetType,
        target_id: Snowflake,
    ) -> ServiceResult<InteractionCounts> {
        let rows = self
            .ctx
            .interaction_repo()
            .count_by_type(target_type, target_id)
            .await?;
        let counts = tally(target_type, &rows);

        match target_type {
            TargetType::Post => self.ctx.post_repo().set_counts(target_id, &counts).await?,
            TargetType::Reply => self.ctx.reply_repo().set_counts(target_id, &counts).await?,
        }

        debug!(
            target_type = %target_type,
            target_id = %target_id,
            likes = counts.likes,
            dislikes = counts.dislikes,
            views = ?counts.views,
            "Counters refreshed"
        );
        Ok(counts)
    }

    /// Count a newly created reply against its post and bump the post's activity
    #[instrument(skip(self))]
    pub async fn record_reply(&self, post_id: Snowflake, at: DateTime<Utc>) -> ServiceResult<()> {
        self.ctx.post_repo().increment_replies(post_id, at).await?;
        Ok(())
    }
}

/// Fold per-kind ledger counts into cached counters. Bookmarks are not counted.
pub fn tally(target_type: TargetType, rows: &[(InteractionType, i64)]) -> InteractionCounts {
    let of = |kind: InteractionType| {
        let n: i64 = rows.iter().filter(|(k, _)| *k == kind).map(|(_, n)| *n).sum();
        i32::try_from(n.max(0)).unwrap_or(i32::MAX)
    };

    InteractionCounts {
        likes: of(InteractionType::Like),
        dislikes: of(InteractionType::Dislike),
        views: match target_type {
            TargetType::Post => Some(of(InteractionType::View)),
            TargetType::Reply => None,
        },
    }
}
