//! Validated contact inquiry.

/// A submission that passed validation. Only `contact::validate` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
  name: String,
  email: String,
  phone: String,
  message: Option<String>,
}

impl Inquiry {
  pub(crate) fn new(name: String, email: String, phone: String, message: Option<String>) -> Self {
    Inquiry {
      name,
      email,
      phone,
      message,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Trimmed submitter address.
  pub fn email(&self) -> &str {
    &self.email
  }

  /// Phone in `+1XXXXXXXXXX` form.
  pub fn phone(&self) -> &str {
    &self.phone
  }

  pub fn message(&self) -> Option<&str> {
    self.message.as_deref()
  }
}
