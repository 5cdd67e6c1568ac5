//! Parallel translations for every player-facing string.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Primary authoring language
    #[default]
    Ko,
    En,
    Ja,
}

impl std::str::FromStr for Language {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            other => Err(crate::DomainError::parse(format!("Unknown language: {other}"))),
        }
    }
}

/// Three translation slots. Missing slots deserialize as empty strings;
/// only convention makes the primary (`ko`) slot mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilingualText {
    #[serde(default)]
    pub ko: String,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ja: String,
}

impl MultilingualText {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            ko: primary.into(),
            ..Self::default()
        }
    }

    pub fn with_en(mut self, text: impl Into<String>) -> Self {
        self.en = text.into();
        self
    }

    /// The default display language.
    pub fn primary(&self) -> &str {
        &self.ko
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ko => &self.ko,
            Language::En => &self.en,
            Language::Ja => &self.ja,
        }
    }

    /// Falls back to the primary slot when the requested translation is blank.
    pub fn get_or_primary(&self, language: Language) -> &str {
        let text = self.get(language);
        if text.trim().is_empty() {
            self.primary()
        } else {
            text
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ko.is_empty() && self.en.is_empty() && self.ja.is_empty()
    }
}
