//! Process configuration read once from the environment.

use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5500;
const DEFAULT_CONTACT_TO: &str = "you@example.com";
const DEFAULT_CONTACT_FROM: &str = "no-reply@novadeskapp.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP relay credentials and endpoint.
#[derive(Debug, Clone, Default)]
pub struct SmtpSettings {
  pub host: String,
  pub port: u16,
  pub user: String,
  pub pass: String,
}

/// Immutable server configuration, built at startup and shared through
/// `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  pub static_dir: PathBuf,
  pub contact_to: String,
  pub contact_from: String,
  pub smtp: SmtpSettings,
}

impl ServerConfig {
  /// Read configuration from process environment variables.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build configuration from an arbitrary key lookup. Empty values are
  /// treated the same as missing ones.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let text = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());
    let port = |key: &str, default: u16| {
      get(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
    };

    ServerConfig {
      host: text("HOST", DEFAULT_HOST),
      port: port("PORT", DEFAULT_PORT),
      static_dir: PathBuf::from(text("STATIC_DIR", ".")),
      contact_to: text("CONTACT_TO", DEFAULT_CONTACT_TO),
      contact_from: text("CONTACT_FROM", DEFAULT_CONTACT_FROM),
      smtp: SmtpSettings {
        host: get("SMTP_HOST").unwrap_or_default(),
        port: port("SMTP_PORT", DEFAULT_SMTP_PORT),
        user: get("SMTP_USER").unwrap_or_default(),
        pass: get("SMTP_PASS").unwrap_or_default(),
      },
    }
  }

  /// True when everything needed to relay mail is present.
  pub fn mail_configured(&self) -> bool {
    !self.smtp.host.is_empty()
      && !self.smtp.user.is_empty()
      && !self.smtp.pass.is_empty()
      && !self.contact_to.is_empty()
      && !self.contact_from.is_empty()
  }
}
