//! Liveness check.

use crate::models::response::status::StatusResponse;
use axum::Json;

pub async fn health() -> Json<StatusResponse> {
  Json(StatusResponse::ok())
}
