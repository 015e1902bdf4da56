//! Post entity <-> model mapper

use forum_core::entities::Post;
use forum_core::value_objects::Snowflake;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            content: model.content,
            category: model.category,
            tags: model.tags,
            is_pinned: model.is_pinned,
            is_locked: model.is_locked,
            is_featured: model.is_featured,
            views_count: model.views_count.max(0),
            likes_count: model.likes_count.max(0),
            dislikes_count: model.dislikes_count.max(0),
            replies_count: model.replies_count.max(0),
            last_activity_at: model.last_activity_at,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
