//! ModerationAction entity <-> model mapper

use forum_core::entities::{ModerationAction, ModerationActionType};
use forum_core::error::DomainError;
use forum_core::value_objects::{Snowflake, TargetType};

use crate::models::ModerationActionModel;

use super::corrupt_column;

impl TryFrom<ModerationActionModel> for ModerationAction {
    type Error = DomainError;

    fn try_from(model: ModerationActionModel) -> Result<Self, Self::Error> {
        let action_type = model
            .action_type
            .parse::<ModerationActionType>()
            .map_err(|_| corrupt_column("moderation_actions.action_type", &model.action_type))?;
        let target_type = model
            .target_type
            .parse::<TargetType>()
            .map_err(|_| corrupt_column("moderation_actions.target_type", &model.target_type))?;

        Ok(ModerationAction {
            id: Snowflake::new(model.id),
            moderator_id: Snowflake::new(model.moderator_id),
            action_type,
            target_type,
            target_id: Snowflake::new(model.target_id),
            reason: model.reason,
            created_at: model.created_at,
        })
    }
}
