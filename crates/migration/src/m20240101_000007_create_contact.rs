//! Create `contact` table.
//! Rows are appended by the public contact form; only admins change `status`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string_len(Contact::FullName, 100).not_null())
                    .col(string_len(Contact::Email, 254).not_null())
                    .col(string_len(Contact::PhoneNumber, 20).not_null())
                    .col(text(Contact::Message).not_null())
                    .col(string_len(Contact::Status, 20).default("new"))
                    .col(text(Contact::AdminNotes).default(""))
                    .col(timestamp_with_time_zone(Contact::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Contact::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact {
    Table,
    Id,
    FullName,
    Email,
    PhoneNumber,
    Message,
    Status,
    AdminNotes,
    CreatedAt,
    UpdatedAt,
}
