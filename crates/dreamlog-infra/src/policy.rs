//! Access policies for post mutation.

use dreamlog_core::domain::DreamPost;
use dreamlog_core::ports::{AccessPolicy, Actor};

/// Only the author of a post may edit or delete it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOnlyPolicy;

impl AccessPolicy for OwnerOnlyPolicy {
    fn can_modify(&self, actor: &Actor, post: &DreamPost) -> bool {
        let allowed = post.is_owned_by(actor.user_id);
        if !allowed {
            tracing::debug!(post_id = %post.id, actor_id = %actor.user_id, "Denied post mutation");
        }
        allowed
    }
}
