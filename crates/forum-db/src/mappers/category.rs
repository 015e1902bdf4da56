//! Category entity <-> model mapper

use forum_core::entities::{Category, CategoryStats};
use forum_core::value_objects::Snowflake;

use crate::models::{CategoryModel, CategoryStatsModel};

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            color: model.color,
            icon: model.icon,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<CategoryStatsModel> for (String, CategoryStats) {
    fn from(model: CategoryStatsModel) -> Self {
        (
            model.name,
            CategoryStats {
                post_count: model.post_count,
                last_activity_at: model.last_activity_at,
            },
        )
    }
}
