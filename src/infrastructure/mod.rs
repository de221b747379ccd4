pub mod auth;
pub mod core;
pub mod i18n;
pub mod mock;
pub mod session_store;
pub mod settings_persistence;
