//! Static site guard.

use axum::{
  extract::Request,
  http::StatusCode,
  middleware::Next,
  response::{IntoResponse, Response},
};
use tracing::debug;

/// True when any path segment names a hidden file or directory, including
/// percent-encoded dots.
pub fn is_hidden_path(path: &str) -> bool {
  path.split('/').any(|seg| {
    seg.starts_with('.') || seg.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("%2e"))
  })
}

/// Answer 404 for dotfiles before they reach the file service.
pub async fn hide_dotfiles(req: Request, next: Next) -> Response {
  if is_hidden_path(req.uri().path()) {
    debug!("refusing hidden path {}", req.uri().path());
    return (StatusCode::NOT_FOUND, "not found").into_response();
  }
  next.run(req).await
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dot_segments_are_hidden() {
    assert!(is_hidden_path("/.env"));
    assert!(is_hidden_path("/.git/config"));
    assert!(is_hidden_path("/assets/.secret/key"));
    assert!(is_hidden_path("/%2Eenv"));
    assert!(is_hidden_path("/%2eenv"));
  }

  #[test]
  fn regular_paths_pass() {
    assert!(!is_hidden_path("/"));
    assert!(!is_hidden_path("/index.html"));
    assert!(!is_hidden_path("/css/site.css"));
    assert!(!is_hidden_path("/contact"));
  }
}
