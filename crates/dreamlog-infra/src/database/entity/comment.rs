//! Comment entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub author_email: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dream_post::Entity",
        from = "Column::PostId",
        to = "super::dream_post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DreamPost,
}

impl Related<super::dream_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DreamPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for dreamlog_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            text: model.text,
            author_email: model.author_email,
            created_at: model.created_at.into(),
        }
    }
}

impl From<dreamlog_core::domain::Comment> for ActiveModel {
    fn from(comment: dreamlog_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            post_id: Set(comment.post_id),
            text: Set(comment.text),
            author_email: Set(comment.author_email),
            created_at: Set(comment.created_at.into()),
        }
    }
}
