use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the authentication flow.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Faqat ijarachi (uy egasi) hisoblar uchun ruxsat berilgan")]
    RoleNotAllowed { role: String },

    #[error("{detail}")]
    Rejected { detail: String },

    /// Per-field messages from the registration endpoint, surfaced verbatim.
    #[error("{}", format_field_errors(.fields))]
    FieldErrors { fields: Vec<(String, String)> },

    #[error("Server bilan bog'lanib bo'lmadi. Qaytadan urinib ko'ring")]
    Network(#[source] anyhow::Error),

    #[error("Kutilmagan javob: {reason}")]
    MalformedResponse { reason: String },
}

fn format_field_errors(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Client-side form validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Parollar mos kelmaydi")]
    PasswordMismatch,

    #[error("Parol kamida {min} ta belgidan iborat bo'lishi kerak")]
    PasswordTooShort { min: usize },

    #[error("Majburiy maydon to'ldirilmagan: {field}")]
    MissingField { field: &'static str },

    #[error("Narx musbat bo'lishi kerak: {price}")]
    NonPositivePrice { price: Decimal },

    #[error("Bo'sh xonalar soni ({available}) umumiy xonalardan ({total}) ko'p")]
    RoomCountMismatch { available: u32, total: u32 },
}

/// Application lifecycle violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Application {id} not found")]
    NotFound { id: uuid::Uuid },

    #[error("Application {id} is {status} and can no longer be answered")]
    AlreadyDecided { id: uuid::Uuid, status: String },
}
