//! Mail body rendering for an inquiry.

use crate::{
  app::config::ServerConfig,
  models::{contact::inquiry::Inquiry, mail::mail_message::MailMessage},
  util::html_escape,
};

pub const SUBJECT: &str = "New NovaDesk Inquiry";

/// Build the outbound message: sender and recipient from config, replies
/// routed to the submitter.
pub fn compose(inquiry: &Inquiry, config: &ServerConfig) -> MailMessage {
  MailMessage {
    from: config.contact_from.clone(),
    to: config.contact_to.clone(),
    reply_to: inquiry.email().to_string(),
    subject: SUBJECT.to_string(),
    text: render_text(inquiry),
    html: render_html(inquiry),
  }
}

fn render_text(inquiry: &Inquiry) -> String {
  let mut text = format!(
    "{SUBJECT}\n\nName: {}\nEmail: {}\nPhone: {}\n",
    inquiry.name(),
    inquiry.email(),
    inquiry.phone()
  );
  if let Some(message) = inquiry.message() {
    text.push_str(&format!("Message:\n{message}\n"));
  }
  text
}

fn render_html(inquiry: &Inquiry) -> String {
  let message = inquiry
    .message()
    .map(|m| {
      format!(
        "\n  <p><strong>Message:</strong><br/>{}</p>",
        html_escape(m)
      )
    })
    .unwrap_or_default();
  format!(
    r#"<div style="font-family:system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,sans-serif">
  <h2 style="margin:0 0 8px 0">{SUBJECT}</h2>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>Phone:</strong> {phone}</p>{message}
  <hr/>
  <p style="color:#666;font-size:12px">Sent from novadesk-site</p>
</div>
"#,
    name = html_escape(inquiry.name()),
    email = html_escape(inquiry.email()),
    phone = html_escape(inquiry.phone()),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::app::config::SmtpSettings;

  fn config() -> ServerConfig {
    ServerConfig {
      host: "127.0.0.1".into(),
      port: 0,
      static_dir: ".".into(),
      contact_to: "sales@example.com".into(),
      contact_from: "no-reply@example.com".into(),
      smtp: SmtpSettings::default(),
    }
  }

  fn inquiry(name: &str, message: Option<&str>) -> Inquiry {
    Inquiry::new(
      name.into(),
      "ada@example.com".into(),
      "+15551234567".into(),
      message.map(str::to_string),
    )
  }

  #[test]
  fn addresses_and_subject() {
    let m = compose(&inquiry("Ada", None), &config());
    assert_eq!(m.from, "no-reply@example.com");
    assert_eq!(m.to, "sales@example.com");
    assert_eq!(m.reply_to, "ada@example.com");
    assert_eq!(m.subject, "New NovaDesk Inquiry");
  }

  #[test]
  fn text_body_mirrors_fields() {
    let m = compose(&inquiry("Ada", Some("Call me\nafter 5")), &config());
    assert_eq!(
      m.text,
      "New NovaDesk Inquiry\n\nName: Ada\nEmail: ada@example.com\nPhone: +15551234567\nMessage:\nCall me\nafter 5\n"
    );
  }

  #[test]
  fn message_section_omitted_when_absent() {
    let m = compose(&inquiry("Ada", None), &config());
    assert!(!m.text.contains("Message:"));
    assert!(!m.html.contains("Message:"));
    assert!(m.html.contains("<p><strong>Phone:</strong> +15551234567</p>"));
  }

  #[test]
  fn html_fields_are_escaped() {
    let m = compose(
      &inquiry("<script>x</script>", Some("<b>hi</b> & bye")),
      &config(),
    );
    assert!(!m.html.contains("<script>"));
    assert!(m.html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(m.html.contains("&lt;b&gt;hi&lt;/b&gt; &amp; bye"));
    // plaintext stays verbatim
    assert!(m.text.contains("Name: <script>x</script>"));
  }
}
