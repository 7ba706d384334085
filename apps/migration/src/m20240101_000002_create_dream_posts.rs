use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DreamPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DreamPosts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(DreamPosts::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(DreamPosts::OwnerEmail).string().not_null())
                    .col(ColumnDef::new(DreamPosts::Title).string().not_null().default(""))
                    .col(ColumnDef::new(DreamPosts::Body).text().not_null().default(""))
                    .col(ColumnDef::new(DreamPosts::Type).string().not_null().default(""))
                    .col(ColumnDef::new(DreamPosts::Quality).string().not_null().default(""))
                    // Kept as the client sent it; months are read from the text.
                    .col(ColumnDef::new(DreamPosts::Date).string().not_null())
                    .col(
                        ColumnDef::new(DreamPosts::IsPublic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DreamPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DreamPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dream_posts_owner")
                            .from(DreamPosts::Table, DreamPosts::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dream_posts_owner_email")
                    .table(DreamPosts::Table)
                    .col(DreamPosts::OwnerEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dream_posts_is_public")
                    .table(DreamPosts::Table)
                    .col(DreamPosts::IsPublic)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DreamPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum DreamPosts {
    Table,
    Id,
    OwnerId,
    OwnerEmail,
    Title,
    Body,
    Type,
    Quality,
    Date,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}
