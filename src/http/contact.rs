//! `POST /contact` handler.

use crate::{
  app::AppState,
  contact::submit,
  models::{contact::contact_form::ContactForm, response::status::StatusResponse},
};
use axum::{
  Form, Json,
  async_trait,
  extract::{FromRequest, Request, State},
  http::header,
  response::IntoResponse,
};
use tracing::debug;

/// Contact body decoded from JSON or a urlencoded form.
///
/// A body that fails to decode becomes an empty form, so the validator
/// answers it with `invalid-input` in the usual envelope.
pub struct ContactBody(pub ContactForm);

#[async_trait]
impl<S> FromRequest<S> for ContactBody
where
  S: Send + Sync,
{
  type Rejection = std::convert::Infallible;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let is_form = req
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    let decoded = if is_form {
      Form::<ContactForm>::from_request(req, state)
        .await
        .map(|Form(f)| f)
        .map_err(|e| e.body_text())
    } else {
      Json::<ContactForm>::from_request(req, state)
        .await
        .map(|Json(f)| f)
        .map_err(|e| e.body_text())
    };

    Ok(ContactBody(decoded.unwrap_or_else(|e| {
      debug!("contact body not decoded: {e}");
      ContactForm::default()
    })))
  }
}

pub async fn contact(
  State(state): State<AppState>,
  ContactBody(form): ContactBody,
) -> impl IntoResponse {
  match submit(&form, &state.config, state.mailer.as_ref()).await {
    Ok(()) => Json(StatusResponse::ok()).into_response(),
    Err(e) => e.into_response(),
  }
}
