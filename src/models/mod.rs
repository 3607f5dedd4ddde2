//! Typed records shared between the HTTP layer and mail dispatch.

pub mod contact;
pub mod mail;
pub mod response;
