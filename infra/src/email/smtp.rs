//! SMTP mailer implementation using Lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use sm_core::domain::entities::verification_code::OtpPurpose;
use sm_core::services::verification::MailService;
use sm_shared::config::EmailConfig;

use crate::InfrastructureError;

/// SMTP mailer delivering OTP emails.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from SMTP configuration.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Email(format!("SMTP relay error: {}", e)))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        let from: Mailbox = format!("{} <{}>", config.from_name, config.from_address)
            .parse()
            .map_err(|e| InfrastructureError::Email(format!("Invalid from address: {}", e)))?;

        info!(host = %config.smtp_host, "SMTP mailer initialized");
        Ok(Self { transport, from })
    }
}

#[async_trait]
impl MailService for SmtpMailer {
    async fn send_otp(&self, to: &str, code: &str, purpose: OtpPurpose) -> Result<(), String> {
        let (subject, heading) = match purpose {
            OtpPurpose::Signup => (
                "OTP for admission",
                "Your OTP for registering in StayMate is",
            ),
            OtpPurpose::PasswordReset => (
                "Email Verification",
                "Your OTP for confirming your Email Address is",
            ),
        };

        let body = format!(
            "<h3>{} </h3><h1 style='font-weight:bold;'>{}</h1>",
            heading, code
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse().map_err(|e| format!("Invalid recipient: {}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| format!("Failed to build email: {}", e))?;

        self.transport.send(message).await.map_err(|e| {
            error!(error = %e, "Failed to send OTP email");
            format!("SMTP send failed: {}", e)
        })?;

        info!(purpose = purpose.as_str(), "OTP email sent");
        Ok(())
    }
}
