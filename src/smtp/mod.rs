//! Outbound SMTP relay.
//!
//! `Mailer` is the seam between contact dispatch and the wire. `SmtpMailer`
//! implements it on top of lettre's async transport.

use crate::{app::config::ServerConfig, models::mail::mail_message::MailMessage};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, Mailboxes, MultiPart, header::To},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Port on which the relay expects TLS from the first byte (SMTPS).
pub const IMPLICIT_TLS_PORT: u16 = 465;

/// Implicit TLS on 465; every other port starts in plaintext and upgrades
/// with STARTTLS when the server offers it.
pub fn uses_implicit_tls(port: u16) -> bool {
    port == IMPLICIT_TLS_PORT
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("smtp transport unavailable")]
    Unavailable,

    #[error("smtp server did not accept the connection")]
    NotConnected,

    #[error("invalid address {address:?}: {reason}")]
    Address { address: String, reason: String },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error(transparent)]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Mail transport capabilities used by contact dispatch.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Connect and authenticate without sending anything.
    async fn verify(&self) -> Result<(), MailError>;

    /// Deliver one message.
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    /// Build the relay transport when the configuration is complete.
    ///
    /// No connection is opened here. An incomplete configuration or a
    /// transport that cannot be built leaves the mailer unavailable, and
    /// `verify` reports it.
    pub fn new(config: &ServerConfig) -> Self {
        if !config.mail_configured() {
            info!("smtp relay not configured; contact form is disabled");
            return SmtpMailer { transport: None };
        }
        match build_transport(config) {
            Ok(transport) => {
                info!(
                    "smtp relay: {}:{} (implicit tls: {})",
                    config.smtp.host,
                    config.smtp.port,
                    uses_implicit_tls(config.smtp.port)
                );
                SmtpMailer {
                    transport: Some(transport),
                }
            }
            Err(e) => {
                warn!("smtp transport setup failed: {e}");
                SmtpMailer { transport: None }
            }
        }
    }

    fn transport(&self) -> Result<&AsyncSmtpTransport<Tokio1Executor>, MailError> {
        self.transport.as_ref().ok_or(MailError::Unavailable)
    }
}

fn build_transport(
    config: &ServerConfig,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
    let smtp = &config.smtp;
    let builder = if uses_implicit_tls(smtp.port) {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
    } else {
        let tls = TlsParameters::new(smtp.host.clone())?;
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
            .tls(Tls::Opportunistic(tls))
    };
    Ok(builder
        .port(smtp.port)
        .credentials(Credentials::new(smtp.user.clone(), smtp.pass.clone()))
        .build())
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e| MailError::Address {
        address: address.to_string(),
        reason: format!("{e}"),
    })
}

/// Recipient lists are comma separated.
fn parse_mailboxes(addresses: &str) -> Result<Mailboxes, MailError> {
    addresses.parse().map_err(|e| MailError::Address {
        address: addresses.to_string(),
        reason: format!("{e}"),
    })
}

/// Convert a composed message into lettre's wire representation.
pub fn to_lettre_message(message: &MailMessage) -> Result<Message, MailError> {
    Message::builder()
        .from(parse_mailbox(&message.from)?)
        .mailbox(To::from(parse_mailboxes(&message.to)?))
        .reply_to(parse_mailbox(&message.reply_to)?)
        .subject(&message.subject)
        .multipart(MultiPart::alternative_plain_html(
            message.text.clone(),
            message.html.clone(),
        ))
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<(), MailError> {
        let transport = self.transport()?;
        debug!("smtp verify");
        if transport.test_connection().await? {
            Ok(())
        } else {
            Err(MailError::NotConnected)
        }
    }

    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let transport = self.transport()?;
        let email = to_lettre_message(message)?;
        let response = transport.send(email).await?;
        debug!("smtp send accepted: {}", response.code());
        Ok(())
    }
}
