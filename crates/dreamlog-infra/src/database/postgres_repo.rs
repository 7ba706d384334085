//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use dreamlog_core::domain::{Comment, DreamPost, User};
use dreamlog_core::error::RepoError;
use dreamlog_core::ports::{PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::dream_post::{self, Entity as DreamPostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL dream post repository. Comments live in their own table.
pub type PostgresPostRepository = PostgresBaseRepository<DreamPostEntity>;

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.len() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

/// Comments of a post, oldest first. Ids break ties within one timestamp.
fn comments_of(post_id: Uuid) -> Select<CommentEntity> {
    CommentEntity::find()
        .filter(comment::Column::PostId.eq(post_id))
        .order_by_asc(comment::Column::CreatedAt)
        .order_by_asc(comment::Column::Id)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

impl PostgresPostRepository {
    async fn post_exists(&self, post_id: Uuid) -> Result<bool, RepoError> {
        let found = DreamPostEntity::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_owner_email(&self, email: &str) -> Result<Vec<DreamPost>, RepoError> {
        tracing::debug!(owner_email = %mask_email(email), "Listing posts by owner");

        let result = DreamPostEntity::find()
            .filter(dream_post::Column::OwnerEmail.eq(email))
            .order_by_desc(dream_post::Column::Date)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_public(&self) -> Result<Vec<DreamPost>, RepoError> {
        let result = DreamPostEntity::find()
            .filter(dream_post::Column::IsPublic.eq(true))
            .order_by_desc(dream_post::Column::Date)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count_by_owner_email(&self, email: &str) -> Result<u64, RepoError> {
        DreamPostEntity::find()
            .filter(dream_post::Column::OwnerEmail.eq(email))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn add_comment(&self, comment: Comment) -> Result<(), RepoError> {
        if !self.post_exists(comment.post_id).await? {
            return Err(RepoError::NotFound);
        }

        let active: comment::ActiveModel = comment.into();
        active.insert(&self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn find_comments(&self, post_id: Uuid) -> Result<Option<Vec<Comment>>, RepoError> {
        if !self.post_exists(post_id).await? {
            return Ok(None);
        }

        let result = comments_of(post_id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(result.into_iter().map(Into::into).collect()))
    }
}
