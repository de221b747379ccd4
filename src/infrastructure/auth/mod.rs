pub mod client;

pub use client::{AuthApi, AuthClient, LoginOutcome, RegistrationForm, SessionTokens};
