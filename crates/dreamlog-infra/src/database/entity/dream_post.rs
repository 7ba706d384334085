//! Dream post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use dreamlog_core::domain::{DreamPost, Owner};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dream_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    /// Denormalized so listings filter without a join.
    pub owner_email: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub quality: String,
    /// ISO-8601 text exactly as submitted.
    pub date: String,
    pub is_public: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DreamPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner: Owner {
                id: model.owner_id,
                email: model.owner_email,
            },
            title: model.title,
            body: model.body,
            kind: model.kind,
            quality: model.quality,
            date: model.date,
            is_public: model.is_public,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<DreamPost> for ActiveModel {
    fn from(post: DreamPost) -> Self {
        Self {
            id: Set(post.id),
            owner_id: Set(post.owner.id),
            owner_email: Set(post.owner.email),
            title: Set(post.title),
            body: Set(post.body),
            kind: Set(post.kind),
            quality: Set(post.quality),
            date: Set(post.date),
            is_public: Set(post.is_public),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
