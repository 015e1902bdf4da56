//! Interaction entity <-> model mapper

use forum_core::entities::Interaction;
use forum_core::error::DomainError;
use forum_core::value_objects::{InteractionType, Snowflake, TargetType};

use crate::models::InteractionModel;

use super::corrupt_column;

impl TryFrom<InteractionModel> for Interaction {
    type Error = DomainError;

    fn try_from(model: InteractionModel) -> Result<Self, Self::Error> {
        let target_type = model
            .target_type
            .parse::<TargetType>()
            .map_err(|_| corrupt_column("interactions.target_type", &model.target_type))?;
        let interaction_type = parse_interaction_type(&model.interaction_type)?;

        Ok(Interaction {
            user_id: Snowflake::new(model.user_id),
            target_type,
            target_id: Snowflake::new(model.target_id),
            interaction_type,
            created_at: model.created_at,
        })
    }
}

pub(crate) fn parse_interaction_type(value: &str) -> Result<InteractionType, DomainError> {
    value
        .parse::<InteractionType>()
        .map_err(|_| corrupt_column("interactions.interaction_type", value))
}
