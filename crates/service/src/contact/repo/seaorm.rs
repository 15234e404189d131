use sea_orm::DatabaseConnection;

use models::{contact, site_settings};

use crate::contact::errors::ContactError;
use crate::contact::repository::ContactRepository;

pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn create(&self, input: contact::NewContact) -> Result<contact::Model, ContactError> {
        contact::create(&self.db, input)
            .await
            .map_err(|e| ContactError::Repository(e.to_string()))
    }

    async fn site_settings(&self) -> Result<Option<site_settings::Model>, ContactError> {
        site_settings::get(&self.db)
            .await
            .map_err(|e| ContactError::Repository(e.to_string()))
    }
}
