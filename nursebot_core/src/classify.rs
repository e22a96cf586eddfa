//! Keyword classification of user replies.
//!
//! A reply is matched case-insensitively against two whole-word keyword
//! lists. The affirmative list is checked first, so a reply containing
//! words from both lists ("not interested") classifies as affirmative.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Words and phrases that count as "yes".
pub const AFFIRMATIVE_KEYWORDS: &[&str] = &[
    "haan",
    "yes",
    "batao",
    "tell me",
    "kya hai",
    "what",
    "more",
    "ok",
    "okay",
    "sure",
    "bilkul",
    "zaroor",
    "interested",
    "want",
    "like",
    "good",
    "great",
    "fine",
    "alright",
];

/// Words and phrases that count as "no".
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "nahi",
    "no",
    "not",
    "dont",
    "don't",
    "na",
    "nope",
    "not interested",
    "no thanks",
    "no thank you",
];

/// Classification of a single user reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Affirmative,
    Negative,
    Unclear,
}

impl Outcome {
    pub const ALL: [Self; 3] = [Self::Affirmative, Self::Negative, Self::Unclear];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Affirmative => "affirmative",
            Self::Negative => "negative",
            Self::Unclear => "unclear",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static AFFIRMATIVE_PATTERN: OnceLock<Regex> = OnceLock::new();
static NEGATIVE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Build `\b(?:w1|w2|...)\b` from a keyword list.
fn keyword_pattern(keywords: &[&str]) -> String {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"\b(?:{alternation})\b")
}

#[expect(
    clippy::expect_used,
    reason = "Pattern is built from escaped static keywords"
)]
fn affirmative_pattern() -> &'static Regex {
    AFFIRMATIVE_PATTERN.get_or_init(|| {
        Regex::new(&keyword_pattern(AFFIRMATIVE_KEYWORDS))
            .expect("Static keyword pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Pattern is built from escaped static keywords"
)]
fn negative_pattern() -> &'static Regex {
    NEGATIVE_PATTERN.get_or_init(|| {
        Regex::new(&keyword_pattern(NEGATIVE_KEYWORDS))
            .expect("Static keyword pattern is guaranteed to be valid")
    })
}

/// Whether `text` contains any affirmative keyword as a whole word.
#[must_use]
pub fn is_affirmative(text: &str) -> bool {
    affirmative_pattern().is_match(&text.trim().to_lowercase())
}

/// Whether `text` contains any negative keyword as a whole word.
#[must_use]
pub fn is_negative(text: &str) -> bool {
    negative_pattern().is_match(&text.trim().to_lowercase())
}

/// Classify a reply. Never fails; anything unmatched is `Unclear`.
#[must_use]
pub fn classify(text: &str) -> Outcome {
    if is_affirmative(text) {
        Outcome::Affirmative
    } else if is_negative(text) {
        Outcome::Negative
    } else {
        Outcome::Unclear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_keywords() {
        for word in AFFIRMATIVE_KEYWORDS {
            assert_eq!(classify(word), Outcome::Affirmative, "keyword: {word}");
        }
        assert_eq!(classify("YES please"), Outcome::Affirmative);
        assert_eq!(classify("  Haan, batao  "), Outcome::Affirmative);
        assert_eq!(classify("please tell me more"), Outcome::Affirmative);
    }

    #[test]
    fn test_negative_keywords() {
        for word in ["nahi", "no", "nope", "dont", "don't", "na", "no thanks"] {
            assert_eq!(classify(word), Outcome::Negative, "keyword: {word}");
        }
        assert_eq!(classify("No."), Outcome::Negative);
        assert_eq!(classify("NAHI"), Outcome::Negative);
    }

    #[test]
    fn test_whole_word_matching() {
        // "know" must not match "no", "okra" must not match "ok"
        assert_eq!(classify("i know"), Outcome::Unclear);
        assert_eq!(classify("okra"), Outcome::Unclear);
        assert_eq!(classify("nana"), Outcome::Unclear);
        assert_eq!(classify("yesterday"), Outcome::Unclear);
    }

    #[test]
    fn test_affirmative_wins_over_negative() {
        assert_eq!(classify("not interested"), Outcome::Affirmative);
        assert_eq!(classify("no, but ok"), Outcome::Affirmative);
        assert!(is_negative("not interested"));
    }

    #[test]
    fn test_unclear() {
        assert_eq!(classify(""), Outcome::Unclear);
        assert_eq!(classify("   "), Outcome::Unclear);
        assert_eq!(classify("maybe"), Outcome::Unclear);
        assert_eq!(classify("hello"), Outcome::Unclear);
        assert_eq!(classify("हाँ"), Outcome::Unclear);
        assert_eq!(classify("#$%^&"), Outcome::Unclear);
    }

    #[test]
    fn test_keyword_pattern_escapes() {
        assert_eq!(keyword_pattern(&["a.b", "c"]), r"\b(?:a\.b|c)\b");
    }
}
