#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Fresh, migrated SQLite file per test; tests never see each other's rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("service-{}.db", uuid::Uuid::new_v4()));
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout: std::time::Duration::from_secs(10),
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

pub async fn seed_service(db: &DatabaseConnection, name: &str, featured: bool, order: i32) -> anyhow::Result<models::service::Model> {
    let input = models::service::NewService {
        name: name.into(),
        short_description: format!("{name} short"),
        full_description: format!("{name} long"),
        image: format!("services/{}.png", slug(name)),
        is_featured: featured,
        order,
        ..Default::default()
    };
    Ok(models::service::create(db, input).await?)
}

pub async fn seed_training(db: &DatabaseConnection, name: &str, featured: bool, order: i32) -> anyhow::Result<models::training::Model> {
    let input = models::training::NewTraining {
        name: name.into(),
        short_description: format!("{name} short"),
        full_description: format!("{name} long"),
        image: format!("trainings/{}.png", slug(name)),
        is_featured: featured,
        order,
        ..Default::default()
    };
    Ok(models::training::create(db, input).await?)
}

pub async fn seed_testimonial(db: &DatabaseConnection, name: &str, featured: bool) -> anyhow::Result<models::testimonial::Model> {
    let input = models::testimonial::NewTestimonial {
        name: name.into(),
        designation: "CTO".into(),
        review: "Great work".into(),
        is_featured: featured,
        ..Default::default()
    };
    Ok(models::testimonial::create(db, input).await?)
}
