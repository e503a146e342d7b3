//! Board model → entity mapper

use newsfeed_core::entities::Board;
use newsfeed_core::value_objects::{BoardId, UserId};

use crate::models::BoardModel;

impl From<BoardModel> for Board {
    fn from(model: BoardModel) -> Self {
        Board {
            id: BoardId::new(model.id),
            user_id: UserId::new(model.user_id),
            title: model.title,
            content: model.content,
            hits: model.hits,
            like_count: model.like_count,
            created_at: model.created_at,
            modified_at: model.modified_at,
            deleted_at: model.deleted_at,
        }
    }
}
