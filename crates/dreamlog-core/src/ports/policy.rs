//! Authorization port for mutating posts.

use uuid::Uuid;

use crate::domain::DreamPost;

/// The authenticated caller attempting an action.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: Uuid,
    pub email: String,
}

/// Decides whether an actor may edit or delete a post.
pub trait AccessPolicy: Send + Sync {
    fn can_modify(&self, actor: &Actor, post: &DreamPost) -> bool;
}
