pub mod dashboard;
pub mod dashboard_components;
pub mod design_system;
pub mod tenant;
pub mod ui;
pub mod ui_components;
