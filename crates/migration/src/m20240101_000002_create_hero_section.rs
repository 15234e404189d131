//! Create `hero_section` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroSection::Table)
                    .if_not_exists()
                    .col(pk_auto(HeroSection::Id))
                    .col(string_len(HeroSection::Title, 200).not_null())
                    .col(string_len(HeroSection::Subtitle, 300).not_null())
                    .col(text(HeroSection::Description).not_null())
                    .col(string_len_null(HeroSection::BackgroundImage, 255))
                    .col(string_len(HeroSection::CtaText, 50).default("Get Started"))
                    .col(string_len(HeroSection::CtaLink, 200).default("#services"))
                    .col(boolean(HeroSection::IsActive).default(true))
                    .col(timestamp_with_time_zone(HeroSection::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(HeroSection::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(HeroSection::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HeroSection {
    Table,
    Id,
    Title,
    Subtitle,
    Description,
    BackgroundImage,
    CtaText,
    CtaLink,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
