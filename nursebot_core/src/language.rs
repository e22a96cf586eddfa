//! Script-based language detection.
//!
//! The detector only looks at the writing system: any Devanagari code point
//! makes a message Hindi, everything else is English. Romanized Hindi
//! ("haan", "nahi") therefore comes back as English.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Unicode block for Devanagari.
const DEVANAGARI: RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Language of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "hi")]
    Hindi,
    #[default]
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Hindi, Self::English];

    /// Detect the language of `text` from its script.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|c| DEVANAGARI.contains(&c)) {
            Self::Hindi
        } else {
            Self::English
        }
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hi" | "hindi" => Ok(Self::Hindi),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("unknown language: {other} (expected 'hi' or 'en')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_detect_devanagari() {
        assert_eq!(Language::detect("हाँ"), Language::Hindi);
        assert_eq!(Language::detect("नहीं"), Language::Hindi);
        assert_eq!(Language::detect("yes हाँ"), Language::Hindi);
    }

    #[test]
    fn test_detect_latin() {
        assert_eq!(Language::detect("yes"), Language::English);
        assert_eq!(Language::detect("haan batao"), Language::English);
        assert_eq!(Language::detect(""), Language::English);
    }

    #[test]
    fn test_block_boundaries() {
        assert_eq!(Language::detect("\u{0900}"), Language::Hindi);
        assert_eq!(Language::detect("\u{097F}"), Language::Hindi);
        assert_eq!(Language::detect("\u{08FF}"), Language::English);
        assert_eq!(Language::detect("\u{0980}"), Language::English);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("hi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Hindi.to_string(), "hi");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Hindi).unwrap();
        assert_eq!(json, "\"hi\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    proptest! {
        #[test]
        fn pure_devanagari_is_hindi(s in "[\u{0900}-\u{097F}]{1,40}") {
            prop_assert_eq!(Language::detect(&s), Language::Hindi);
        }

        #[test]
        fn pure_ascii_is_english(s in "[\\x00-\\x7F]{0,80}") {
            prop_assert_eq!(Language::detect(&s), Language::English);
        }
    }
}
