//! SMTP configuration snapshot without secrets.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmtpDebug {
    pub ok: bool,
    pub configured: bool,
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub have_user: bool,
    pub have_pass: bool,
    pub to_set: bool,
    pub from_set: bool,
}
