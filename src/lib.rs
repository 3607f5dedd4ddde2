//! novadesk-site library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `contact`: form validation and mail dispatch
//! - `smtp`: outbound relay behind the `Mailer` trait
//! - `models`: typed records used across layers
//! - `util`: tracing, HTML escaping and field normalization

pub mod app;
pub mod contact;
pub mod http;
pub mod models;
pub mod smtp;
pub mod util;
