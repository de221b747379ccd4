pub mod analytics_view;
pub mod applications_view;
pub mod auth_view;
pub mod chat_view;
pub mod listing_form;
pub mod listings_view;
pub mod metrics_card;
pub mod profile_view;
