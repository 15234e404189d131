//! Create `training` table.
//! Same shape as `service` plus duration, level and curriculum.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Training::Table)
                    .if_not_exists()
                    .col(pk_auto(Training::Id))
                    .col(string_len(Training::Name, 200).not_null())
                    .col(string_len(Training::ShortDescription, 300).not_null())
                    .col(text(Training::FullDescription).not_null())
                    .col(string_len(Training::Image, 255).not_null())
                    .col(string_len(Training::Duration, 100).default(""))
                    .col(string_len(Training::Level, 20).default("beginner"))
                    .col(text(Training::Features).default(""))
                    .col(text(Training::Curriculum).default(""))
                    .col(string_len_null(Training::PdfFile, 255))
                    .col(boolean(Training::IsFeatured).default(false))
                    .col(integer(Training::Order).default(0))
                    .col(timestamp_with_time_zone(Training::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Training::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Training::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Training {
    Table,
    Id,
    Name,
    ShortDescription,
    FullDescription,
    Image,
    Duration,
    Level,
    Features,
    Curriculum,
    PdfFile,
    IsFeatured,
    Order,
    CreatedAt,
    UpdatedAt,
}
