use std::sync::Arc;

use sea_orm::DatabaseConnection;

use configs::{AppConfig, SiteConfig};
use service::contact::{repo::seaorm::SeaOrmContactRepository, ContactService};
use service::mail::Notifier;

/// Shared by every handler; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub site: Arc<SiteConfig>,
    pub contact: Arc<ContactService<SeaOrmContactRepository>>,
    pub admin_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, cfg: &AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        let repo = Arc::new(SeaOrmContactRepository { db: db.clone() });
        Self {
            db,
            site: Arc::new(cfg.site.clone()),
            contact: Arc::new(ContactService::new(repo, notifier)),
            admin_key: cfg.admin.api_key.as_deref().map(Arc::from),
        }
    }
}
