//! Entity-level tests against a throwaway SQLite file.

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait, Set};
use uuid::Uuid;

use crate::{contact, db, errors::ModelError, site_settings, testimonial, training};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let path = std::env::temp_dir().join(format!("models-{}.db", Uuid::new_v4()));
    let cfg = db::DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 1,
        ..db::DatabaseConfig::default()
    };
    let db = db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn site_settings_is_a_singleton() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(site_settings::get(&db).await?.is_none());

    let first = site_settings::create(&db, site_settings::SiteSettingsInput::default()).await?;
    assert_eq!(first.site_name, site_settings::DEFAULT_SITE_NAME);
    assert_eq!(first.smtp_port, 587);
    assert!(first.smtp_use_tls);

    let second = site_settings::create(&db, site_settings::SiteSettingsInput::default()).await;
    assert!(matches!(second, Err(ModelError::Conflict(_))));

    // raw ActiveModel insert goes through the same hook
    let raw = site_settings::ActiveModel {
        site_name: sea_orm::Set("Other".into()),
        ..Default::default()
    };
    assert!(sea_orm::ActiveModelTrait::insert(raw, &db).await.is_err());
    assert_eq!(site_settings::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn site_settings_update_edits_existing_row() -> Result<()> {
    let db = setup_test_db().await?;
    let missing = site_settings::update(&db, site_settings::SiteSettingsInput::default()).await?;
    assert!(missing.is_none());

    site_settings::create(&db, site_settings::SiteSettingsInput::default()).await?;
    let patch = site_settings::SiteSettingsInput {
        email: Some(" owner@example.com ".into()),
        smtp_username: Some("mailer@example.com".into()),
        ..Default::default()
    };
    let updated = site_settings::update(&db, patch).await?.expect("row exists");
    assert_eq!(updated.email, "owner@example.com");
    assert_eq!(updated.notification_recipient(), "owner@example.com");
    assert!(updated.smtp_configured());
    Ok(())
}

#[tokio::test]
async fn site_settings_rejects_bad_email() {
    let input = site_settings::SiteSettingsInput { email: Some("nope".into()), ..Default::default() };
    assert!(matches!(input.validate(), Err(ModelError::Validation(_))));
}

#[test]
fn recipient_falls_back_to_smtp_username() {
    let now = chrono::Utc::now().into();
    let m = site_settings::Model {
        id: 1,
        site_name: "x".into(),
        site_logo: None,
        favicon: None,
        primary_color: String::new(),
        secondary_color: String::new(),
        phone_number: String::new(),
        phone_number_2: String::new(),
        email: String::new(),
        address: String::new(),
        facebook_url: String::new(),
        twitter_url: String::new(),
        instagram_url: String::new(),
        linkedin_url: String::new(),
        whatsapp_number: String::new(),
        whatsapp_message: String::new(),
        smtp_host: "smtp.example.com".into(),
        smtp_port: 587,
        smtp_username: "mailer@example.com".into(),
        smtp_password: "secret".into(),
        smtp_use_tls: true,
        map_embed_code: String::new(),
        created_at: now,
        updated_at: now,
    };
    assert_eq!(m.notification_recipient(), "mailer@example.com");
    let json = serde_json::to_value(&m).unwrap();
    assert!(json.get("smtp_password").is_none());
}

#[tokio::test]
async fn contact_defaults_to_new_and_admin_can_triage() -> Result<()> {
    let db = setup_test_db().await?;
    let c = contact::create(&db, contact::NewContact {
        full_name: "Jane".into(),
        email: "jane@example.com".into(),
        phone_number: "555".into(),
        message: "hi".into(),
    })
    .await?;
    assert_eq!(c.status, contact::Status::New);
    assert_eq!(c.admin_notes, "");

    let updated = contact::update_status(&db, c.id, Some(contact::Status::InProgress), Some("called back".into()))
        .await?
        .expect("contact exists");
    assert_eq!(updated.status, contact::Status::InProgress);
    assert_eq!(updated.admin_notes, "called back");
    assert!(contact::update_status(&db, c.id + 100, None, None).await?.is_none());
    Ok(())
}

#[test]
fn contact_status_parse_and_label() {
    assert_eq!(contact::Status::parse("in_progress"), Some(contact::Status::InProgress));
    assert_eq!(contact::Status::parse("done"), None);
    assert_eq!(contact::Status::Completed.label(), "Completed");
}

#[tokio::test]
async fn training_level_round_trips_as_string() -> Result<()> {
    let db = setup_test_db().await?;
    let t = training::create(&db, training::NewTraining {
        name: "Rust".into(),
        short_description: "systems".into(),
        full_description: "long".into(),
        image: "trainings/rust.png".into(),
        level: training::Level::Advanced,
        ..Default::default()
    })
    .await?;
    let found = training::Entity::find_by_id(t.id).one(&db).await?.expect("saved");
    assert_eq!(found.level, training::Level::Advanced);
    assert_eq!(found.detail_path(), format!("/training/{}/", t.id));
    Ok(())
}

#[tokio::test]
async fn testimonial_rating_out_of_range_is_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let bad = testimonial::create(&db, testimonial::NewTestimonial {
        name: "A".into(),
        designation: "CTO".into(),
        review: "great".into(),
        rating: 6,
        ..Default::default()
    })
    .await;
    assert!(matches!(bad, Err(ModelError::Validation(_))));
    assert_eq!(testimonial::Entity::find().count(&db).await?, 0);
    Ok(())
}

async fn testimonial_at(db: &DatabaseConnection, name: &str, order: i32, created_at: &str) -> Result<testimonial::Model> {
    let t = testimonial::create(db, testimonial::NewTestimonial {
        name: name.into(),
        designation: "CTO".into(),
        review: "great".into(),
        order,
        ..Default::default()
    })
    .await?;
    let mut am = t.into_active_model();
    am.created_at = Set(chrono::DateTime::parse_from_rfc3339(created_at)?);
    Ok(am.update(db).await?)
}

fn testimonial_names(rows: &[testimonial::Model]) -> Vec<&str> {
    rows.iter().map(|t| t.name.as_str()).collect()
}

#[tokio::test]
async fn testimonials_with_equal_order_list_newest_first() -> Result<()> {
    let db = setup_test_db().await?;
    testimonial_at(&db, "Oldest", 0, "2024-01-01T09:00:00+00:00").await?;
    testimonial_at(&db, "Newest", 0, "2024-03-01T09:00:00+00:00").await?;
    testimonial_at(&db, "Middle", 0, "2024-02-01T09:00:00+00:00").await?;
    let rows = testimonial::ordered().all(&db).await?;
    assert_eq!(testimonial_names(&rows), ["Newest", "Middle", "Oldest"]);
    Ok(())
}

#[tokio::test]
async fn testimonial_lower_order_beats_newer() -> Result<()> {
    let db = setup_test_db().await?;
    testimonial_at(&db, "Pinned", 0, "2023-06-01T09:00:00+00:00").await?;
    testimonial_at(&db, "Recent", 1, "2024-06-01T09:00:00+00:00").await?;
    testimonial_at(&db, "Recent but lower", 2, "2024-07-01T09:00:00+00:00").await?;
    let rows = testimonial::ordered().all(&db).await?;
    assert_eq!(testimonial_names(&rows), ["Pinned", "Recent", "Recent but lower"]);
    Ok(())
}
