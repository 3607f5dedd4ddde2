//! Contact form submission: validate, verify the relay, send one email.

use crate::{
  app::config::ServerConfig,
  models::{contact::contact_form::ContactForm, response::status::StatusResponse},
  smtp::Mailer,
};
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub mod compose;
pub mod validate;

pub use compose::compose;
pub use validate::validate;

/// Terminal outcome of a failed submission. The `Display` text is the wire
/// code sent in the `error` field.
///
/// Transport causes are logged where they occur and never carried into
/// the client-facing error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
  #[error("invalid-input")]
  InvalidInput,

  #[error("invalid-phone")]
  InvalidPhone,

  #[error("server-not-configured")]
  NotConfigured,

  #[error("smtp-verify-failed")]
  VerifyFailed,

  #[error("send-failed")]
  SendFailed,
}

impl ContactError {
  pub fn status(self) -> StatusCode {
    match self {
      ContactError::InvalidInput | ContactError::InvalidPhone => StatusCode::BAD_REQUEST,
      ContactError::NotConfigured | ContactError::VerifyFailed | ContactError::SendFailed => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl IntoResponse for ContactError {
  fn into_response(self) -> axum::response::Response {
    (self.status(), Json(StatusResponse::error(self.to_string()))).into_response()
  }
}

/// Run one submission through validation, relay verification and delivery.
pub async fn submit(
  form: &ContactForm,
  config: &ServerConfig,
  mailer: &dyn Mailer,
) -> Result<(), ContactError> {
  let inquiry = match validate(form, config) {
    Ok(inquiry) => inquiry,
    Err(ContactError::NotConfigured) => {
      warn!("contact rejected: smtp relay is not configured");
      return Err(ContactError::NotConfigured);
    }
    Err(e) => {
      debug!("contact rejected: {e}");
      return Err(e);
    }
  };

  if let Err(e) = mailer.verify().await {
    error!("smtp verify failed: {e}");
    return Err(ContactError::VerifyFailed);
  }

  let message = compose(&inquiry, config);
  if let Err(e) = mailer.send(&message).await {
    error!("contact send failed: {e}");
    return Err(ContactError::SendFailed);
  }

  info!("contact inquiry relayed to {}", message.to);
  Ok(())
}
