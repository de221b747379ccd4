use crate::domain::locale::LocalizedText;
use serde::{Deserialize, Serialize};

/// A university students search housing around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    /// Short code used on listings, e.g. "TATU".
    pub code: String,
    pub name: LocalizedText,
    pub location: LocalizedText,
}

/// A region option in the search filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub value: String,
    pub label: LocalizedText,
}
