use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, DreamPost, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Dream post repository.
///
/// Listings are ordered by the post `date` text, newest first.
#[async_trait]
pub trait PostRepository: BaseRepository<DreamPost, Uuid> {
    /// All posts whose owner has the given email.
    async fn find_by_owner_email(&self, email: &str) -> Result<Vec<DreamPost>, RepoError>;

    /// All posts marked public, regardless of owner.
    async fn find_public(&self) -> Result<Vec<DreamPost>, RepoError>;

    async fn count_by_owner_email(&self, email: &str) -> Result<u64, RepoError>;

    /// Append a comment. Fails with [`RepoError::NotFound`] when the post is gone.
    async fn add_comment(&self, comment: Comment) -> Result<(), RepoError>;

    /// Comments of a post in insertion order, `None` when the post does not exist.
    async fn find_comments(&self, post_id: Uuid) -> Result<Option<Vec<Comment>>, RepoError>;
}
