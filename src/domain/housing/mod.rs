pub mod application;
pub mod filter;
pub mod listing;
pub mod stats;
pub mod university;
