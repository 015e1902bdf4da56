//! Category database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Aggregate over live posts grouped by category name
#[derive(Debug, Clone, FromRow)]
pub struct CategoryStatsModel {
    pub name: String,
    pub post_count: i64,
    pub last_activity_at: Option<DateTime<Utc>>,
}
