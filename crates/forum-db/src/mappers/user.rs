//! User entity <-> model mapper

use forum_core::entities::User;
use forum_core::error::DomainError;
use forum_core::value_objects::{Snowflake, UserRole};

use crate::models::UserModel;

use super::corrupt_column;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<UserRole>()
            .map_err(|_| corrupt_column("users.role", &model.role))?;

        Ok(User {
            id: Snowflake::new(model.id),
            name: model.name,
            avatar: model.avatar,
            role,
            is_banned: model.is_banned,
            banned_until: model.banned_until,
            created_at: model.created_at,
        })
    }
}
