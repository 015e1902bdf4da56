//! Identity service
//!
//! Resolves bearer credentials to user records and author display fields.
//! Credential issuance belongs to the identity provider.

use std::collections::HashMap;

use forum_common::AppError;
use forum_core::{AuthorSummary, Snowflake, User};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify a bearer token and load its user.
    ///
    /// # Errors
    /// `InvalidToken`/`TokenExpired` for bad credentials, `UnknownUser` when the
    /// subject no longer exists.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let user_id = self.ctx.jwt_service().verify(token)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UnknownUser)?;

        debug!(user_id = %user.id, role = %user.role, "Authenticated");
        Ok(user)
    }

    /// Display fields for every id; ids missing from the store map to an unknown author
    #[instrument(skip(self, ids))]
    pub async fn authors(
        &self,
        mut ids: Vec<Snowflake>,
    ) -> ServiceResult<HashMap<Snowflake, AuthorSummary>> {
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = self.ctx.user_repo().find_by_ids(&ids).await?;
        let mut authors: HashMap<Snowflake, AuthorSummary> =
            users.iter().map(|u| (u.id, AuthorSummary::from(u))).collect();

        for id in ids {
            authors.entry(id).or_insert_with(|| AuthorSummary::unknown(id));
        }
        Ok(authors)
    }
}
