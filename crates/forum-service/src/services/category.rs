//! Category catalog service
//!
//! The single source of category display metadata. Posts reference
//! categories by name; unknown or inactive names fall back to the default
//! color and icon.

use std::collections::HashMap;

use chrono::Utc;
use forum_core::{Category, CategoryDisplay, DomainError, DEFAULT_CATEGORIES};
use tracing::{info, instrument};

use crate::dto::CategoryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upsert the default seed set by name. Safe to run on every startup;
    /// existing rows keep their id and creation time.
    #[instrument(skip(self))]
    pub async fn ensure_defaults(&self) -> ServiceResult<usize> {
        let repo = self.ctx.category_repo();

        for seed in DEFAULT_CATEGORIES {
            let existing = repo.find_by_name(seed.name).await?;
            let (id, created_at) = existing
                .map(|c| (c.id, c.created_at))
                .unwrap_or_else(|| (self.ctx.generate_id(), Utc::now()));

            let category = Category {
                id,
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                color: seed.color.to_string(),
                icon: seed.icon.to_string(),
                display_order: seed.display_order,
                is_active: true,
                created_at,
            };
            repo.upsert(&category).await?;
        }

        info!(count = DEFAULT_CATEGORIES.len(), "Default categories ensured");
        Ok(DEFAULT_CATEGORIES.len())
    }

    /// Active categories in display order, optionally with live statistics
    #[instrument(skip(self))]
    pub async fn list_categories(&self, include_stats: bool) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list(true).await?;
        let responses = categories.iter().map(CategoryResponse::from);

        if !include_stats {
            return Ok(responses.collect());
        }

        let stats: HashMap<_, _> = self.ctx.category_repo().stats().await?.into_iter().collect();
        Ok(responses
            .map(|resp| {
                let s = stats.get(&resp.name).copied().unwrap_or_default();
                resp.with_stats(s)
            })
            .collect())
    }

    /// Display metadata of every active category, keyed by name
    #[instrument(skip(self))]
    pub async fn display_map(&self) -> ServiceResult<HashMap<String, CategoryDisplay>> {
        let categories = self.ctx.category_repo().list(true).await?;
        Ok(categories
            .into_iter()
            .map(|c| {
                let display = c.display();
                (c.name, display)
            })
            .collect())
    }

    /// Display metadata for one category name
    pub async fn display_for(&self, name: &str) -> ServiceResult<CategoryDisplay> {
        let category = self.ctx.category_repo().find_by_name(name).await?;
        Ok(match category {
            Some(c) if c.is_active => c.display(),
            _ => CategoryDisplay::fallback(name),
        })
    }

    /// The active category a post may be filed under.
    ///
    /// # Errors
    /// `Validation` when the name is not an active catalog entry.
    pub async fn require_active(&self, name: &str) -> ServiceResult<Category> {
        let name = name.trim().to_lowercase();
        match self.ctx.category_repo().find_by_name(&name).await? {
            Some(c) if c.is_active => Ok(c),
            _ => Err(DomainError::Validation(format!("Unknown category: {name}")).into()),
        }
    }
}

/// Look up a name in a display map, falling back to the default display
pub fn resolve_display(map: &HashMap<String, CategoryDisplay>, name: &str) -> CategoryDisplay {
    map.get(name)
        .cloned()
        .unwrap_or_else(|| CategoryDisplay::fallback(name))
}
