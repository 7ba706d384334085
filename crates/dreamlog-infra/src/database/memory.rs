//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use dreamlog_core::domain::{Comment, DreamPost, User};
use dreamlog_core::error::RepoError;
use dreamlog_core::ports::{BaseRepository, PostRepository, UserRepository};

/// In-memory user store keyed by id. Emails are unique.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        let taken = users
            .values()
            .any(|u| u.email == user.email && u.id != user.id);
        if taken {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.users
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[derive(Default)]
struct PostStore {
    posts: HashMap<Uuid, DreamPost>,
    comments: HashMap<Uuid, Vec<Comment>>,
}

/// In-memory post store. Comments are kept per post in insertion order.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<PostStore>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut posts: Vec<DreamPost>) -> Vec<DreamPost> {
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }
}

#[async_trait]
impl BaseRepository<DreamPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DreamPost>, RepoError> {
        Ok(self.store.read().await.posts.get(&id).cloned())
    }

    async fn save(&self, post: DreamPost) -> Result<DreamPost, RepoError> {
        let mut store = self.store.write().await;
        store.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.posts.remove(&id).ok_or(RepoError::NotFound)?;
        store.comments.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_owner_email(&self, email: &str) -> Result<Vec<DreamPost>, RepoError> {
        let store = self.store.read().await;
        let owned = store
            .posts
            .values()
            .filter(|p| p.owner.email == email)
            .cloned()
            .collect();
        Ok(Self::newest_first(owned))
    }

    async fn find_public(&self) -> Result<Vec<DreamPost>, RepoError> {
        let store = self.store.read().await;
        let public = store
            .posts
            .values()
            .filter(|p| p.is_public)
            .cloned()
            .collect();
        Ok(Self::newest_first(public))
    }

    async fn count_by_owner_email(&self, email: &str) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .posts
            .values()
            .filter(|p| p.owner.email == email)
            .count() as u64)
    }

    async fn add_comment(&self, comment: Comment) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if !store.posts.contains_key(&comment.post_id) {
            return Err(RepoError::NotFound);
        }
        store
            .comments
            .entry(comment.post_id)
            .or_default()
            .push(comment);
        Ok(())
    }

    async fn find_comments(&self, post_id: Uuid) -> Result<Option<Vec<Comment>>, RepoError> {
        let store = self.store.read().await;
        if !store.posts.contains_key(&post_id) {
            return Ok(None);
        }
        Ok(Some(
            store.comments.get(&post_id).cloned().unwrap_or_default(),
        ))
    }
}
