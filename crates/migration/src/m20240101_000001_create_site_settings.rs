//! Create `site_settings` table.
//!
//! Holds at most one row; the singleton rule is enforced by the entity's save hook,
//! not by a constraint here.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(SiteSettings::Id))
                    .col(string_len(SiteSettings::SiteName, 100).default("Zynder Tech"))
                    .col(string_len_null(SiteSettings::SiteLogo, 255))
                    .col(string_len_null(SiteSettings::Favicon, 255))
                    .col(string_len(SiteSettings::PrimaryColor, 18).default("#007bff"))
                    .col(string_len(SiteSettings::SecondaryColor, 18).default("#6c757d"))
                    .col(string_len(SiteSettings::PhoneNumber, 20).default(""))
                    .col(string_len(SiteSettings::PhoneNumber2, 20).default(""))
                    .col(string_len(SiteSettings::Email, 254).default(""))
                    .col(text(SiteSettings::Address).default(""))
                    .col(string_len(SiteSettings::FacebookUrl, 200).default(""))
                    .col(string_len(SiteSettings::TwitterUrl, 200).default(""))
                    .col(string_len(SiteSettings::InstagramUrl, 200).default(""))
                    .col(string_len(SiteSettings::LinkedinUrl, 200).default(""))
                    .col(string_len(SiteSettings::WhatsappNumber, 20).default(""))
                    .col(text(SiteSettings::WhatsappMessage))
                    .col(string_len(SiteSettings::SmtpHost, 100).default(""))
                    .col(integer(SiteSettings::SmtpPort).default(587))
                    .col(string_len(SiteSettings::SmtpUsername, 100).default(""))
                    .col(string_len(SiteSettings::SmtpPassword, 100).default(""))
                    .col(boolean(SiteSettings::SmtpUseTls).default(true))
                    .col(text(SiteSettings::MapEmbedCode).default(""))
                    .col(timestamp_with_time_zone(SiteSettings::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(SiteSettings::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SiteSettings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SiteSettings {
    Table,
    Id,
    SiteName,
    SiteLogo,
    Favicon,
    PrimaryColor,
    SecondaryColor,
    PhoneNumber,
    #[sea_orm(iden = "phone_number_2")]
    PhoneNumber2,
    Email,
    Address,
    FacebookUrl,
    TwitterUrl,
    InstagramUrl,
    LinkedinUrl,
    WhatsappNumber,
    WhatsappMessage,
    SmtpHost,
    SmtpPort,
    SmtpUsername,
    SmtpPassword,
    SmtpUseTls,
    MapEmbedCode,
    CreatedAt,
    UpdatedAt,
}
