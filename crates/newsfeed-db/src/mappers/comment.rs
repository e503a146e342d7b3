//! Comment model → entity mapper

use newsfeed_core::entities::Comment;
use newsfeed_core::value_objects::{BoardId, CommentId, UserId};

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            board_id: BoardId::new(model.board_id),
            user_id: UserId::new(model.user_id),
            content: model.content,
            like_count: model.like_count,
            created_at: model.created_at,
            modified_at: model.modified_at,
            deleted_at: model.deleted_at,
        }
    }
}
