//! Utility functions: tracing, HTML escape, contact field normalization.

use regex::Regex;
use std::sync::LazyLock;
use tracing_subscriber::{EnvFilter, fmt};

// Syntactic screen only: user@host.tld with no whitespace or extra '@'.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// HTML escaping for values interpolated into mail bodies.
pub fn html_escape(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
    .replace('\'', "&#39;")
}

/// Keep only ASCII digits.
pub fn digits_only(s: &str) -> String {
  s.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize a US phone number to `+1XXXXXXXXXX`.
///
/// Returns `None` unless the input carries exactly ten digits once
/// punctuation and spacing are stripped. A leading country code is not
/// recognised, so `1-555-123-4567` is rejected.
pub fn to_e164_us(s: &str) -> Option<String> {
  let d = digits_only(s);
  if d.len() != 10 {
    return None;
  }
  Some(format!("+1{d}"))
}

/// Permissive email shape check; surrounding whitespace is ignored.
pub fn is_valid_email(s: &str) -> bool {
  EMAIL_RE.is_match(s.trim())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digits_only_strips_everything_else() {
    assert_eq!(digits_only("(555) 123-4567"), "5551234567");
    assert_eq!(digits_only(""), "");
    assert_eq!(digits_only("no digits"), "");
    assert_eq!(digits_only("٣5"), "5");
  }

  #[test]
  fn digits_only_is_idempotent() {
    for s in ["", "abc", "+1 (555) 123-4567", "12 34", "x9y8z7"] {
      let once = digits_only(s);
      assert_eq!(digits_only(&once), once);
    }
  }

  #[test]
  fn e164_requires_exactly_ten_digits() {
    assert_eq!(to_e164_us("5551234567").as_deref(), Some("+15551234567"));
    assert_eq!(to_e164_us("(555) 123-4567").as_deref(), Some("+15551234567"));
    assert_eq!(to_e164_us("555.123.4567").as_deref(), Some("+15551234567"));
    assert_eq!(to_e164_us("555-123"), None);
    assert_eq!(to_e164_us("123"), None);
    assert_eq!(to_e164_us(""), None);
    assert_eq!(to_e164_us("1-555-123-4567"), None);
  }

  #[test]
  fn email_shape() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("  first.last+tag@sub.example.org  "));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email(""));
  }

  #[test]
  fn escape_covers_markup_and_quotes() {
    assert_eq!(
      html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
      "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
  }
}
