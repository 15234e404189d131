//! Create `testimonial` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(pk_auto(Testimonial::Id))
                    .col(string_len(Testimonial::Name, 100).not_null())
                    .col(string_len(Testimonial::Designation, 100).not_null())
                    .col(string_len(Testimonial::Company, 100).default(""))
                    .col(string_len_null(Testimonial::Image, 255))
                    .col(text(Testimonial::Review).not_null())
                    .col(integer(Testimonial::Rating).default(5))
                    .col(boolean(Testimonial::IsFeatured).default(false))
                    .col(integer(Testimonial::Order).default(0))
                    .col(timestamp_with_time_zone(Testimonial::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Testimonial::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Testimonial::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Testimonial {
    Table,
    Id,
    Name,
    Designation,
    Company,
    Image,
    Review,
    Rating,
    IsFeatured,
    Order,
    CreatedAt,
    UpdatedAt,
}
