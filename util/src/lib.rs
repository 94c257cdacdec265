pub mod outline;
pub mod question;
