//! Contact form validation.

use super::ContactError;
use crate::{
  app::config::ServerConfig,
  models::contact::{contact_form::ContactForm, inquiry::Inquiry},
  util::{is_valid_email, to_e164_us},
};

/// Check client input, then server configuration, in that order.
pub fn validate(form: &ContactForm, config: &ServerConfig) -> Result<Inquiry, ContactError> {
  let name = form.name.as_deref().unwrap_or_default();
  let email = form.email.as_deref().unwrap_or_default();
  if name.is_empty() || !is_valid_email(email) {
    return Err(ContactError::InvalidInput);
  }

  let phone = to_e164_us(form.phone.as_deref().unwrap_or_default())
    .ok_or(ContactError::InvalidPhone)?;

  if !config.mail_configured() {
    return Err(ContactError::NotConfigured);
  }

  let message = form.message.clone().filter(|m| !m.is_empty());
  Ok(Inquiry::new(
    name.to_string(),
    email.trim().to_string(),
    phone,
    message,
  ))
}
