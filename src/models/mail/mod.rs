pub mod mail_message;
