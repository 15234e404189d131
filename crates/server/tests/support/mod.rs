#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use configs::AppConfig;
use server::{routes, startup::build_cors, state::AppState};
use service::mail::mock::MockNotifier;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub notifier: Arc<MockNotifier>,
}

/// Router over a fresh migrated SQLite file; mail goes to a recording mock.
pub async fn spawn_app(admin_key: Option<&str>) -> anyhow::Result<TestApp> {
    let root = std::env::temp_dir().join(format!("brochure-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(root.join("media"))?;
    let mut cfg = AppConfig::default();
    cfg.database.url = format!("sqlite://{}?mode=rwc", root.join("site.db").display());
    cfg.site.media_dir = root.join("media").display().to_string();
    cfg.site.static_dir = root.join("static").display().to_string();
    cfg.admin.api_key = admin_key.map(str::to_string);

    let db_cfg = models::db::DatabaseConfig { max_connections: 1, ..models::db::DatabaseConfig::from(&cfg.database) };
    let db = models::db::connect_with_config(&db_cfg).await?;
    migration::Migrator::up(&db, None).await?;

    let notifier = Arc::new(MockNotifier::default());
    let state = AppState::new(db.clone(), &cfg, notifier.clone());
    Ok(TestApp { router: routes::build_router(state, build_cors()), db, notifier })
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> anyhow::Result<Response> {
        Ok(self.router.clone().oneshot(req).await?)
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<Response> {
        self.send(Request::builder().uri(uri).body(Body::empty())?).await
    }
}

pub async fn json_body(res: Response) -> anyhow::Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub async fn seed_service(db: &DatabaseConnection, name: &str, featured: bool) -> anyhow::Result<models::service::Model> {
    Ok(models::service::create(db, models::service::NewService {
        name: name.into(),
        short_description: format!("{name} short"),
        full_description: format!("{name} long"),
        image: "services/x.png".into(),
        is_featured: featured,
        ..Default::default()
    })
    .await?)
}

pub async fn seed_training(db: &DatabaseConnection, name: &str) -> anyhow::Result<models::training::Model> {
    Ok(models::training::create(db, models::training::NewTraining {
        name: name.into(),
        short_description: format!("{name} short"),
        full_description: format!("{name} long"),
        image: "trainings/x.png".into(),
        ..Default::default()
    })
    .await?)
}
