use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use models::contact;

use super::domain::{self, ContactInput};
use super::errors::ContactError;
use super::repository::ContactRepository;
use crate::mail::{Email, Notifier, SmtpSettings};

/// Contact-form workflow independent of the web framework.
pub struct ContactService<R: ContactRepository> {
    repo: Arc<R>,
    notifier: Arc<dyn Notifier>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: Arc<R>, notifier: Arc<dyn Notifier>) -> Self { Self { repo, notifier } }

    /// Validate, persist with status `new`, then try to notify staff.
    ///
    /// The notification outcome never reaches the caller.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::contact::{domain::ContactInput, repository::mock::MockContactRepository, ContactService};
    /// use service::mail::mock::MockNotifier;
    /// let repo = Arc::new(MockContactRepository::default());
    /// let svc = ContactService::new(repo.clone(), Arc::new(MockNotifier::default()));
    /// let input = ContactInput { full_name: "Jane".into(), email: "jane@example.com".into(), phone_number: "555".into(), message: "Hi".into() };
    /// let saved = tokio_test::block_on(svc.submit(input)).unwrap();
    /// assert_eq!(saved.status, models::contact::Status::New);
    /// assert_eq!(repo.contacts().len(), 1);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn submit(&self, input: ContactInput) -> Result<contact::Model, ContactError> {
        let new = domain::validate(&input).map_err(|errors| {
            debug!(fields = ?errors.keys().collect::<Vec<_>>(), "contact rejected");
            ContactError::Invalid(errors)
        })?;
        let saved = self.repo.create(new).await?;
        info!(contact_id = saved.id, event = "contact_received", "contact saved");
        self.notify(&saved).await;
        Ok(saved)
    }

    async fn notify(&self, saved: &contact::Model) {
        let settings = match self.repo.site_settings().await {
            Ok(Some(s)) if s.smtp_configured() => s,
            Ok(_) => {
                debug!(contact_id = saved.id, "smtp not configured, skipping notification");
                return;
            }
            Err(e) => {
                warn!(contact_id = saved.id, error = %e, "cannot load site settings for notification");
                return;
            }
        };
        let email = Email::contact_notification(&settings, saved);
        let sent = match SmtpSettings::try_from(&settings) {
            Ok(smtp) => self.notifier.send(&smtp, &email).await,
            Err(e) => Err(e),
        };
        match sent {
            Ok(()) => info!(contact_id = saved.id, to = %email.to, event = "contact_notified", "notification sent"),
            Err(e) => warn!(contact_id = saved.id, error = %e, event = "contact_notify_failed", "notification failed"),
        }
    }
}
