use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service / Training: default listing order (order, name)
        manager
            .create_index(
                Index::create()
                    .name("idx_service_order_name")
                    .table(Service::Table)
                    .col(Service::Order)
                    .col(Service::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_training_order_name")
                    .table(Training::Table)
                    .col(Training::Order)
                    .col(Training::Name)
                    .to_owned(),
            )
            .await?;

        // Testimonial: featured lookups on the home page
        manager
            .create_index(
                Index::create()
                    .name("idx_testimonial_featured")
                    .table(Testimonial::Table)
                    .col(Testimonial::IsFeatured)
                    .to_owned(),
            )
            .await?;

        // Contact: admin inbox filtered by status, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_status")
                    .table(Contact::Table)
                    .col(Contact::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_created_at")
                    .table(Contact::Table)
                    .col(Contact::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_order_name").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_training_order_name").table(Training::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_testimonial_featured").table(Testimonial::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_status").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_created_at").table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Service { Table, Order, Name }

#[derive(DeriveIden)]
enum Training { Table, Order, Name }

#[derive(DeriveIden)]
enum Testimonial { Table, IsFeatured }

#[derive(DeriveIden)]
enum Contact { Table, Status, CreatedAt }
