//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies also implement `Validate`.
//! Query DTOs convert into typed domain values with `into_*`/`parse` helpers.

use forum_core::{DomainError, InteractionType, PostQuery, PostSort, Snowflake, TargetType};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Maximum ids accepted by the interaction-state lookup
pub const MAX_LOOKUP_IDS: usize = 100;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 3, max = 200, message = "Title must be 3-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 50000, message = "Content must be 1-50000 characters"))]
    pub content: String,

    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: String,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 tags are allowed"))]
    pub tags: Vec<String>,
}

/// Update post request. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 3, max = 200, message = "Title must be 3-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 50000, message = "Content must be 1-50000 characters"))]
    pub content: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: Option<String>,

    #[validate(length(max = 10, message = "At most 10 tags are allowed"))]
    pub tags: Option<Vec<String>>,
}

impl UpdatePostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.category.is_none() && self.tags.is_none()
    }
}

/// Staff-only flag changes
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_any_flag"))]
pub struct UpdatePostFlagsRequest {
    pub is_pinned: Option<bool>,
    pub is_locked: Option<bool>,
    pub is_featured: Option<bool>,
}

fn validate_any_flag(req: &UpdatePostFlagsRequest) -> Result<(), ValidationError> {
    if req.is_pinned.is_none() && req.is_locked.is_none() && req.is_featured.is_none() {
        let mut err = ValidationError::new("no_flags");
        err.message = Some("At least one flag must be provided".into());
        return Err(err);
    }
    Ok(())
}

/// `GET /posts` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ListPostsQuery {
    /// Normalize into a [`PostQuery`]; an unknown sort mode is a validation error
    pub fn into_query(self) -> Result<PostQuery, DomainError> {
        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => PostSort::default(),
            Some(s) => s.parse()?,
        };
        Ok(PostQuery::new(
            self.page,
            self.limit,
            self.category,
            sort,
            self.search,
            self.featured,
        ))
    }
}

// ============================================================================
// Reply Requests
// ============================================================================

/// Create reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    pub post_id: Snowflake,

    #[serde(default)]
    pub parent_reply_id: Option<Snowflake>,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

/// Update reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReplyRequest {
    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

// ============================================================================
// Interaction Requests
// ============================================================================

/// Body of `POST /interactions` and `DELETE /interactions`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InteractionRequest {
    #[validate(length(min = 1, message = "target_type is required"))]
    pub target_type: String,

    pub target_id: Snowflake,

    #[validate(length(min = 1, message = "interaction_type is required"))]
    pub interaction_type: String,
}

impl InteractionRequest {
    /// Only `like`, `dislike` and `bookmark` are user actions; views are recorded implicitly
    pub fn parse(&self) -> Result<(TargetType, InteractionType), DomainError> {
        let target_type = self.target_type.parse::<TargetType>()?;
        let interaction_type = InteractionType::parse_user_action(&self.interaction_type)?;
        Ok((target_type, interaction_type))
    }
}

/// `GET /interactions?target_type=post&target_ids=1,2,3`
#[derive(Debug, Clone, Deserialize)]
pub struct UserInteractionsQuery {
    pub target_type: String,
    #[serde(default)]
    pub target_ids: String,
}

impl UserInteractionsQuery {
    pub fn parse(&self) -> Result<(TargetType, Vec<Snowflake>), DomainError> {
        let target_type = self.target_type.parse::<TargetType>()?;

        let ids = self
            .target_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Snowflake::parse(s)
                    .map_err(|_| DomainError::Validation(format!("Invalid target id: {s}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if ids.len() > MAX_LOOKUP_IDS {
            return Err(DomainError::Validation(format!(
                "At most {MAX_LOOKUP_IDS} target ids are allowed"
            )));
        }
        Ok((target_type, ids))
    }
}

// ============================================================================
// Category Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCategoriesQuery {
    #[serde(default)]
    pub include_stats: bool,
}
