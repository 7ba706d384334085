use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The user a post belongs to. Fixed when the post is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Uuid,
    pub email: String,
}

/// Dream post entity - one journal entry with its sleep and dream metadata.
///
/// `kind` and `quality` are free text; classification happens in
/// [`crate::stats`]. `date` is kept exactly as the client sent it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamPost {
    pub id: Uuid,
    pub owner: Owner,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub quality: String,
    pub date: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a post. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub kind: Option<String>,
    pub quality: Option<String>,
    pub date: Option<String>,
    pub is_public: Option<bool>,
}

impl DreamPost {
    /// Create a new post owned by `owner`.
    pub fn new(
        owner: Owner,
        title: String,
        body: String,
        kind: String,
        quality: String,
        date: String,
        is_public: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            title,
            body,
            kind,
            quality,
            date,
            is_public,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner.id == user_id
    }

    /// Apply a partial update. The owner is never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        let PostChanges {
            title,
            body,
            kind,
            quality,
            date,
            is_public,
        } = changes;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(quality) = quality {
            self.quality = quality;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(is_public) = is_public {
            self.is_public = is_public;
        }
        self.updated_at = Utc::now();
    }
}
