//! Raw contact form body as submitted by the browser.

use serde::{
  Deserialize, Deserializer,
  de::{self, Visitor},
};
use std::fmt;

/// Unvalidated `/contact` body. Every field is optional here; the
/// validator decides what is acceptable.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactForm {
  #[serde(default, deserialize_with = "scalar_text")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "scalar_text")]
  pub email: Option<String>,
  #[serde(default, deserialize_with = "scalar_text")]
  pub phone: Option<String>,
  #[serde(default, deserialize_with = "scalar_text")]
  pub message: Option<String>,
}

/// Accept strings, numbers and booleans as text; `null` is absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  struct ScalarText;

  impl<'de> Visitor<'de> for ScalarText {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
      Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
      Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
      Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
      d.deserialize_any(ScalarText)
    }
  }

  deserializer.deserialize_any(ScalarText)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn reads_plain_strings() {
    let form: ContactForm = serde_json::from_value(json!({
      "name": "Ada",
      "email": "ada@example.com",
      "phone": "(555) 123-4567",
      "message": "hello"
    }))
    .unwrap();
    assert_eq!(form.name.as_deref(), Some("Ada"));
    assert_eq!(form.phone.as_deref(), Some("(555) 123-4567"));
    assert_eq!(form.message.as_deref(), Some("hello"));
  }

  #[test]
  fn numbers_become_text_and_null_is_absent() {
    let form: ContactForm = serde_json::from_value(json!({
      "name": "Ada",
      "email": "ada@example.com",
      "phone": 5551234567u64,
      "message": null
    }))
    .unwrap();
    assert_eq!(form.phone.as_deref(), Some("5551234567"));
    assert_eq!(form.message, None);
  }

  #[test]
  fn missing_fields_default_to_none() {
    let form: ContactForm = serde_json::from_value(json!({})).unwrap();
    assert!(form.name.is_none());
    assert!(form.email.is_none());
  }

  #[test]
  fn nested_values_are_rejected() {
    let res: Result<ContactForm, _> = serde_json::from_value(json!({ "name": ["a"] }));
    assert!(res.is_err());
  }
}
