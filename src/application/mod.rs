pub mod analytics;
pub mod catalog;
pub mod inbox;
pub mod messenger;
pub mod session;
