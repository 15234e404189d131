use async_trait::async_trait;

use models::{contact, site_settings};

use super::errors::ContactError;

/// Persistence needed by contact intake.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, input: contact::NewContact) -> Result<contact::Model, ContactError>;
    async fn site_settings(&self) -> Result<Option<site_settings::Model>, ContactError>;
}

/// In-memory repository for tests and doc examples.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockContactRepository {
        contacts: Mutex<Vec<contact::Model>>,
        settings: Mutex<Option<site_settings::Model>>,
    }

    impl MockContactRepository {
        pub fn with_settings(settings: site_settings::Model) -> Self {
            Self { settings: Mutex::new(Some(settings)), ..Default::default() }
        }

        pub fn contacts(&self) -> Vec<contact::Model> {
            self.contacts.lock().unwrap_or_else(|p| p.into_inner()).clone()
        }
    }

    #[async_trait]
    impl ContactRepository for MockContactRepository {
        async fn create(&self, input: contact::NewContact) -> Result<contact::Model, ContactError> {
            let mut contacts = self.contacts.lock().unwrap_or_else(|p| p.into_inner());
            let now = chrono::Utc::now().into();
            let model = contact::Model {
                id: contacts.len() as i32 + 1,
                full_name: input.full_name,
                email: input.email,
                phone_number: input.phone_number,
                message: input.message,
                status: contact::Status::New,
                admin_notes: String::new(),
                created_at: now,
                updated_at: now,
            };
            contacts.push(model.clone());
            Ok(model)
        }

        async fn site_settings(&self) -> Result<Option<site_settings::Model>, ContactError> {
            Ok(self.settings.lock().unwrap_or_else(|p| p.into_inner()).clone())
        }
    }
}
