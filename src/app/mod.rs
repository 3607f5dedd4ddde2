//! Application setup and runtime.

use crate::{
  http,
  smtp::{Mailer, SmtpMailer},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub mod config;

use config::ServerConfig;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<ServerConfig>,
  pub mailer: Arc<dyn Mailer>,
}

impl AppState {
  pub fn new(config: ServerConfig, mailer: Arc<dyn Mailer>) -> Self {
    AppState {
      config: Arc::new(config),
      mailer,
    }
  }
}

/// Bind the listener for `config.host` and `config.port`. Host names are
/// resolved, so `localhost` works as well as an IP literal.
pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
  TcpListener::bind((config.host.as_str(), config.port)).await
}

/// Load configuration from the environment and serve until shutdown.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let config = ServerConfig::from_env();
  let listener = bind(&config).await?;
  let addr = listener.local_addr()?;
  let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&config));
  let static_dir = config.static_dir.display().to_string();

  let state = AppState::new(config, mailer);
  let app = http::build_router(state);

  info!("[novadesk-site] listening on http://{}", addr);
  info!("serving static files from {}", static_dir);
  info!("contact endpoint:     POST http://{}/contact", addr);

  axum::serve(listener, app).await?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn binds_host_names() {
    let config = ServerConfig::from_lookup(|key| match key {
      "HOST" => Some("localhost".to_string()),
      "PORT" => Some("0".to_string()),
      _ => None,
    });
    let listener = bind(&config).await.unwrap();
    assert!(listener.local_addr().unwrap().ip().is_loopback());
  }

  #[tokio::test]
  async fn binds_ip_literals() {
    let config = ServerConfig::from_lookup(|key| match key {
      "HOST" => Some("127.0.0.1".to_string()),
      "PORT" => Some("0".to_string()),
      _ => None,
    });
    let listener = bind(&config).await.unwrap();
    assert_eq!(listener.local_addr().unwrap().ip().to_string(), "127.0.0.1");
  }
}
