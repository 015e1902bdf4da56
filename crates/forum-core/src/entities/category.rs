//! Category catalog entries and the display metadata joined into posts

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    /// Unique; posts reference categories by this name
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn display(&self) -> CategoryDisplay {
        CategoryDisplay {
            name: self.name.clone(),
            color: self.color.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// Display metadata attached to every post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDisplay {
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl CategoryDisplay {
    pub const DEFAULT_COLOR: &'static str = "#6b7280";
    pub const DEFAULT_ICON: &'static str = "💬";

    /// Display used when a post names a category the catalog does not (or no longer) lists
    pub fn fallback(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: Self::DEFAULT_COLOR.to_string(),
            icon: Self::DEFAULT_ICON.to_string(),
        }
    }
}

/// Live statistics computed on read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryStats {
    pub post_count: i64,
    pub last_activity_at: Option<DateTime<Utc>>,
}

/// A seed row upserted by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySeed {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub display_order: i32,
}

pub const DEFAULT_CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "general",
        description: "General discussion about newsletters and publishing",
        color: "#3b82f6",
        icon: "💬",
        display_order: 1,
    },
    CategorySeed {
        name: "announcements",
        description: "Platform news and updates",
        color: "#ef4444",
        icon: "📢",
        display_order: 2,
    },
    CategorySeed {
        name: "newsletter-tips",
        description: "Growth, deliverability and engagement tips",
        color: "#10b981",
        icon: "💡",
        display_order: 3,
    },
    CategorySeed {
        name: "writing",
        description: "Craft, style and editing",
        color: "#8b5cf6",
        icon: "✍️",
        display_order: 4,
    },
    CategorySeed {
        name: "feedback",
        description: "Ideas and feature requests",
        color: "#f59e0b",
        icon: "📝",
        display_order: 5,
    },
    CategorySeed {
        name: "showcase",
        description: "Share your newsletter with the community",
        color: "#ec4899",
        icon: "🌟",
        display_order: 6,
    },
    CategorySeed {
        name: "help",
        description: "Questions and support",
        color: "#06b6d4",
        icon: "❓",
        display_order: 7,
    },
];
