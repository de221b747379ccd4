pub mod chat;
pub mod errors;
pub mod housing;
pub mod locale;
pub mod users;
