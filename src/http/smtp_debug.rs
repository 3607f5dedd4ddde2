//! SMTP configuration diagnostics. Reports presence, never values, of
//! credentials.

use crate::{
  app::{AppState, config::ServerConfig},
  models::response::smtp_debug::SmtpDebug,
  smtp::uses_implicit_tls,
};
use axum::{Json, extract::State};

pub async fn smtp_debug(State(state): State<AppState>) -> Json<SmtpDebug> {
  Json(describe(&state.config))
}

pub fn describe(config: &ServerConfig) -> SmtpDebug {
  let smtp = &config.smtp;
  SmtpDebug {
    ok: true,
    configured: config.mail_configured(),
    host: if smtp.host.is_empty() {
      "(empty)".to_string()
    } else {
      smtp.host.clone()
    },
    port: smtp.port,
    secure: uses_implicit_tls(smtp.port),
    have_user: !smtp.user.is_empty(),
    have_pass: !smtp.pass.is_empty(),
    to_set: !config.contact_to.is_empty(),
    from_set: !config.contact_from.is_empty(),
  }
}
