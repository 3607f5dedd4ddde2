//! `{ok, error}` envelope shared by the JSON endpoints.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
  pub ok: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl StatusResponse {
  pub fn ok() -> Self {
    StatusResponse { ok: true, error: None }
  }

  pub fn error(code: impl Into<String>) -> Self {
    StatusResponse {
      ok: false,
      error: Some(code.into()),
    }
  }
}
