//! Notification channel implementations

use super::types::Alert;
use crate::config::{SmtpConfig, SmtpSecurity};
use crate::utils::error::Result;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on a single SMTP conversation
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Notification channel trait
#[async_trait::async_trait]
pub trait NotificationChannel: Send + Sync + std::fmt::Debug {
    /// Deliver one alert
    async fn send(&self, alert: &Alert) -> Result<()>;

    /// Get channel name
    fn name(&self) -> &str;
}

/// Email notification channel
#[derive(Debug)]
pub struct EmailChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl EmailChannel {
    /// Create a new email notification channel
    ///
    /// No connection is opened until the first alert is sent.
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let builder = match config.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            }
            SmtpSecurity::Plain => {
                warn!("SMTP security is disabled, alerts are sent in clear text");
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str())
            }
        };

        let mut builder = builder.port(config.port).timeout(Some(SMTP_TIMEOUT));
        if config.has_credentials() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            sender: config.sender().parse()?,
        })
    }

    /// Render the alert as a plain-text message
    pub fn build_message(&self, alert: &Alert) -> Result<Message> {
        let recipient: Mailbox = alert.recipient.parse()?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(alert.subject.as_str())
            .date(alert.timestamp.into())
            .header(ContentType::TEXT_PLAIN)
            .body(alert.body.clone())?;

        Ok(message)
    }
}

#[async_trait::async_trait]
impl NotificationChannel for EmailChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        let message = self.build_message(alert)?;
        let response = self.transport.send(message).await?;
        debug!("SMTP server accepted alert: {:?}", response.code());
        Ok(())
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// Channel that only writes the alert to the log
///
/// Used for dry runs where no mail should leave the host.
#[derive(Debug, Default, Clone)]
pub struct LogChannel;

#[async_trait::async_trait]
impl NotificationChannel for LogChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        warn!(
            recipient = %alert.recipient,
            subject = %alert.subject,
            "Dry run, alert not sent:\n{}",
            alert.body
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
