//! Post listing query: filters, sort modes, and page arithmetic
//!
//! The SQL repository implements these semantics in the database; the
//! [`PostQuery::matches`] and [`PostSort::compare`] helpers are the reference
//! rendition used by in-process stores and tests.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Post;
use crate::error::DomainError;

/// Default page size for listings
pub const DEFAULT_PAGE_SIZE: i64 = 20;
/// Maximum page size for listings
pub const MAX_PAGE_SIZE: i64 = 100;
/// Sentinel category meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Sort modes for post listings. Pinned posts always come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostSort {
    /// Most recent activity first
    #[default]
    Recent,
    /// Likes + replies descending, then recency
    Popular,
    /// Views descending, then recency
    Trending,
}

impl PostSort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::Trending => "trending",
        }
    }

    /// Total order used for listings
    pub fn compare(self, a: &Post, b: &Post) -> Ordering {
        let by_mode = match self {
            Self::Recent => Ordering::Equal,
            Self::Popular => b.popularity().cmp(&a.popularity()),
            Self::Trending => b.views_count.cmp(&a.views_count),
        };

        b.is_pinned
            .cmp(&a.is_pinned)
            .then(by_mode)
            .then_with(|| b.last_activity_at.cmp(&a.last_activity_at))
            .then_with(|| b.id.cmp(&a.id))
    }
}

impl fmt::Display for PostSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "popular" => Ok(Self::Popular),
            "trending" => Ok(Self::Trending),
            other => Err(DomainError::Validation(format!("Unknown sort mode: {other}"))),
        }
    }
}

/// A validated, normalized post listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    /// 1-indexed page number
    pub page: i64,
    /// Page size, clamped to `1..=MAX_PAGE_SIZE`
    pub limit: i64,
    /// `None` means every category
    pub category: Option<String>,
    pub sort: PostSort,
    /// Lowercased, trimmed search term; `None` when blank
    pub search: Option<String>,
    pub featured_only: bool,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            category: None,
            sort: PostSort::Recent,
            search: None,
            featured_only: false,
        }
    }
}

impl PostQuery {
    /// Build a query, normalizing paging, the `all` category sentinel, and blank searches
    pub fn new(
        page: Option<i64>,
        limit: Option<i64>,
        category: Option<String>,
        sort: PostSort,
        search: Option<String>,
        featured_only: bool,
    ) -> Self {
        let category = category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);
        let search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            category,
            sort,
            search,
            featured_only,
        }
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Whether a post passes every filter of this query
    pub fn matches(&self, post: &Post) -> bool {
        if post.is_deleted {
            return false;
        }
        if self.featured_only && !post.is_featured {
            return false;
        }
        if let Some(category) = &self.category {
            if &post.category != category {
                return false;
            }
        }
        match &self.search {
            Some(term) => {
                post.title.to_lowercase().contains(term.as_str())
                    || post.content.to_lowercase().contains(term.as_str())
                    || post.tags.iter().any(|t| t == term)
            }
            None => true,
        }
    }
}

/// Pagination metadata returned with every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let limit = limit.max(1);
        Self {
            page,
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        }
    }
}
