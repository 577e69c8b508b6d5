//! SMTP delivery of the rendered digest.
//!
//! Delivery is the one step whose failure aborts the run: every upstream
//! problem degrades into missing or untranslated content, but if the mail
//! can't go out there is nothing to salvage: no partial send, no retry
//! queue. The transport handles STARTTLS and authentication itself.

use lettre::message::{SinglePart, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, instrument};

/// Default SMTP relay (Gmail, STARTTLS).
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port for STARTTLS.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Errors raised while building or delivering the digest email.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// SMTP relay settings and credentials.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Mail sink for rendered digests.
pub struct Mailer {
    config: SmtpConfig,
}

impl Mailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Send one HTML email to all recipients in a single message.
    ///
    /// Fire-and-forget: there is no application-level retry, and an error
    /// here is fatal for the run.
    #[instrument(level = "info", skip_all)]
    pub async fn send(
        &self,
        subject: &str,
        html_body: &str,
        sender: &str,
        recipients: &[String],
    ) -> Result<(), MailError> {
        let mut builder = Message::builder().from(sender.parse()?).subject(subject);
        for recipient in recipients {
            builder = builder.to(recipient.parse()?);
        }
        let email = builder.singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_HTML)
                .body(html_body.to_string()),
        )?;

        let credentials = Credentials::new(
            self.config.username.clone(),
            self.config.password.clone(),
        );
        let transport: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
                .port(self.config.port)
                .credentials(credentials)
                .build();

        transport.send(email).await?;

        info!(
            to = recipients.len(),
            subject, "Digest email sent"
        );
        Ok(())
    }
}
