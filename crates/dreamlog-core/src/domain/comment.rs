use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment on a dream post. Comments are append-only.
///
/// Ids are UUIDv7, so they sort in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub text: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: Uuid, text: String, author_email: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            post_id,
            text,
            author_email,
            created_at: Utc::now(),
        }
    }
}
