//! Outbound notification mail.
//!
//! Transport settings live in the SiteSettings row and can change at any time, so
//! [`SmtpNotifier`] builds a fresh transport per message.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::{debug, instrument};

use models::{contact, site_settings};

pub const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address {0:?}: {1}")]
    Address(String, String),
    #[error("cannot build message: {0}")]
    Build(String),
    #[error("smtp error: {0}")]
    Transport(String),
    #[error("invalid smtp settings: {0}")]
    Settings(String),
}

/// Relay credentials taken from SiteSettings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub use_tls: bool,
}

impl TryFrom<&site_settings::Model> for SmtpSettings {
    type Error = MailError;

    fn try_from(s: &site_settings::Model) -> Result<Self, Self::Error> {
        let port = u16::try_from(s.smtp_port).map_err(|_| MailError::Settings(format!("port {}", s.smtp_port)))?;
        let host = match s.smtp_host.trim() {
            "" => "localhost".to_string(),
            h => h.to_string(),
        };
        Ok(Self {
            host,
            port,
            username: s.smtp_username.clone(),
            password: s.smtp_password.clone(),
            use_tls: s.smtp_use_tls,
        })
    }
}

/// A plain-text mail ready to hand to a [`Notifier`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Email {
    /// Staff notification for a new contact submission.
    pub fn contact_notification(settings: &site_settings::Model, c: &contact::Model) -> Self {
        Self {
            from: settings.smtp_username.clone(),
            to: settings.notification_recipient().to_string(),
            subject: format!("New Contact Form Submission from {}", c.full_name),
            body: format!(
                "Name: {}\nEmail: {}\nPhone: {}\nMessage: {}",
                c.full_name, c.email, c.phone_number, c.message
            ),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, smtp: &SmtpSettings, email: &Email) -> Result<(), MailError>;
}

fn mailbox(addr: &str) -> Result<Mailbox, MailError> {
    addr.parse::<Mailbox>().map_err(|e| MailError::Address(addr.to_string(), e.to_string()))
}

pub fn build_message(email: &Email) -> Result<Message, MailError> {
    Message::builder()
        .from(mailbox(&email.from)?)
        .to(mailbox(&email.to)?)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

/// lettre SMTP relay: STARTTLS when `use_tls`, plain otherwise.
#[derive(Clone, Debug, Default)]
pub struct SmtpNotifier;

#[async_trait]
impl Notifier for SmtpNotifier {
    #[instrument(skip(self, smtp, email), fields(host = %smtp.host, port = smtp.port, to = %email.to))]
    async fn send(&self, smtp: &SmtpSettings, email: &Email) -> Result<(), MailError> {
        let message = build_message(email)?;
        let builder = if smtp.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
                .map_err(|e| MailError::Transport(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
        };
        let transport = builder
            .port(smtp.port)
            .credentials(Credentials::new(smtp.username.clone(), smtp.password.clone()))
            .timeout(Some(SMTP_TIMEOUT))
            .build();
        let response = transport.send(message).await.map_err(|e| MailError::Transport(e.to_string()))?;
        debug!(code = %response.code(), "smtp accepted message");
        Ok(())
    }
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Records every mail; optionally fails each send.
    #[derive(Default)]
    pub struct MockNotifier {
        pub sent: Mutex<Vec<Email>>,
        pub fail: bool,
    }

    impl MockNotifier {
        pub fn failing() -> Self { Self { fail: true, ..Default::default() } }

        pub fn sent(&self) -> Vec<Email> { self.sent.lock().unwrap_or_else(|p| p.into_inner()).clone() }
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn send(&self, _smtp: &SmtpSettings, email: &Email) -> Result<(), MailError> {
            self.sent.lock().unwrap_or_else(|p| p.into_inner()).push(email.clone());
            if self.fail {
                return Err(MailError::Transport("connection refused".into()));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(from: &str, to: &str) -> Email {
        Email { from: from.into(), to: to.into(), subject: "s".into(), body: "b".into() }
    }

    #[test]
    fn build_message_rejects_bad_addresses() {
        assert!(build_message(&email("mailer@example.com", "owner@example.com")).is_ok());
        assert!(matches!(build_message(&email("", "owner@example.com")), Err(MailError::Address(..))));
        assert!(matches!(build_message(&email("mailer@example.com", "not an address")), Err(MailError::Address(..))));
    }

    #[tokio::test]
    async fn unreachable_relay_is_an_error_not_a_panic() {
        let smtp = SmtpSettings {
            host: "127.0.0.1".into(),
            port: 1,
            username: "mailer@example.com".into(),
            password: "x".into(),
            use_tls: false,
        };
        let res = SmtpNotifier.send(&smtp, &email("mailer@example.com", "owner@example.com")).await;
        assert!(matches!(res, Err(MailError::Transport(_))));
    }
}
