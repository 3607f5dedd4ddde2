pub mod smtp_debug;
pub mod status;
