//! Create `trusted_company` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrustedCompany::Table)
                    .if_not_exists()
                    .col(pk_auto(TrustedCompany::Id))
                    .col(string_len(TrustedCompany::Name, 200).not_null())
                    .col(string_len(TrustedCompany::Logo, 255).not_null())
                    .col(string_len(TrustedCompany::WebsiteUrl, 200).default(""))
                    .col(integer(TrustedCompany::Order).default(0))
                    .col(timestamp_with_time_zone(TrustedCompany::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(TrustedCompany::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TrustedCompany::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TrustedCompany { Table, Id, Name, Logo, WebsiteUrl, Order, CreatedAt, UpdatedAt }
