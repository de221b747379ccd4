use serde::{Deserialize, Serialize};

/// UI languages supported by the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Uz,
    Ru,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "uz" => Some(Language::Uz),
            "ru" => Some(Language::Ru),
            _ => None,
        }
    }
}

/// A piece of text carried in both Uzbek and Russian.
///
/// The original dataset stores every user-visible string twice; keeping the
/// pair together avoids parallel-field drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    pub uz: String,
    pub ru: String,
}

impl LocalizedText {
    pub fn new(uz: impl Into<String>, ru: impl Into<String>) -> Self {
        Self {
            uz: uz.into(),
            ru: ru.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Uz => &self.uz,
            Language::Ru => &self.ru,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_text_picks_language() {
        let text = LocalizedText::new("Toshkent", "Ташкент");
        assert_eq!(text.get(Language::Uz), "Toshkent");
        assert_eq!(text.get(Language::Ru), "Ташкент");
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code("ru"), Some(Language::Ru));
        assert_eq!(Language::Uz.code(), "uz");
        assert_eq!(Language::from_code("en"), None);
    }
}
