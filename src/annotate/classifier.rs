//! Fallback sentiment classifier.
//!
//! Used only when a reply carries no valid `[emotion:...]` tag. Scans the
//! sanitized text for keyword substrings (fast, no LLM call) and returns the
//! emotion of the first rule that hits.

use super::types::Emotion;
use serde::{Deserialize, Serialize};

/// Keywords that map a piece of text to one emotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub emotion: Emotion,
    /// Lowercase trigger substrings, tested in order.
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(emotion: Emotion, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            emotion,
            keywords: keywords
                .into_iter()
                .map(|kw| kw.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// First keyword of this rule contained in `lower`, if any.
    fn first_hit<'a>(&'a self, lower: &str) -> Option<&'a str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|kw| !kw.is_empty() && lower.contains(kw))
    }
}

/// Classify `text` against `rules` in the order given.
///
/// First hit wins: no scoring and no longest-match preference. Returns
/// [`Emotion::Neutral`] when nothing matches.
pub fn classify(text: &str, rules: &[KeywordRule]) -> Emotion {
    if text.is_empty() {
        return Emotion::Neutral;
    }
    let lower = text.to_lowercase();

    for rule in rules {
        if let Some(kw) = rule.first_hit(&lower) {
            tracing::debug!(emotion = %rule.emotion, keyword = kw, "keyword fallback matched");
            return rule.emotion;
        }
    }

    Emotion::Neutral
}
