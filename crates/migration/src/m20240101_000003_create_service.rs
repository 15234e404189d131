//! Create `service` table.
//! Offered services shown on the home page (featured subset) and the services list.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(string_len(Service::Name, 200).not_null())
                    .col(string_len(Service::ShortDescription, 300).not_null())
                    .col(text(Service::FullDescription).not_null())
                    .col(string_len(Service::Image, 255).not_null())
                    .col(text(Service::Features).default(""))
                    .col(text(Service::Specialties).default(""))
                    .col(string_len_null(Service::PdfFile, 255))
                    .col(boolean(Service::IsFeatured).default(false))
                    .col(integer(Service::Order).default(0))
                    .col(timestamp_with_time_zone(Service::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Service::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
    Name,
    ShortDescription,
    FullDescription,
    Image,
    Features,
    Specialties,
    PdfFile,
    IsFeatured,
    Order,
    CreatedAt,
    UpdatedAt,
}
