//! Reply entity <-> model mapper

use forum_core::entities::Reply;
use forum_core::value_objects::Snowflake;

use crate::models::ReplyModel;

impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            author_id: Snowflake::new(model.author_id),
            parent_reply_id: model.parent_reply_id.map(Snowflake::new),
            depth: model.depth,
            content: model.content,
            likes_count: model.likes_count.max(0),
            dislikes_count: model.dislikes_count.max(0),
            is_deleted: model.is_deleted,
            is_edited: model.is_edited,
            edited_at: model.edited_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
