//! Per-locale keyword tables for the fallback classifier.
//!
//! The annotator never looks at the locale itself, only at the ordered rules
//! of whichever table it is handed.

mod tables;

use crate::annotate::{Emotion, KeywordRule, UnknownVariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Locale ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ja,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
        }
    }

    /// Lenient lookup from a language tag such as `zh-CN` or `ja_JP`.
    /// Only the primary subtag is used; anything unknown falls back to English.
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim();
        primary.parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Locale::En, Locale::Zh, Locale::Ja]
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "locale",
                value: s.to_string(),
            })
    }
}

// ── Keyword Table ──────────────────────────────────────────

/// Ordered rules consumed read-only by the classifier.
///
/// Tables built from locale data or JSON always use the priority order
/// happy, sad, angry, surprised. [`KeywordTable::from_rules`] keeps whatever
/// order it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "KeywordLists", into = "KeywordLists")]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

/// On-disk shape of a keyword table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeywordLists {
    #[serde(default)]
    happy: Vec<String>,
    #[serde(default)]
    sad: Vec<String>,
    #[serde(default)]
    angry: Vec<String>,
    #[serde(default)]
    surprised: Vec<String>,
}

impl From<KeywordLists> for KeywordTable {
    fn from(lists: KeywordLists) -> Self {
        Self::from_rules(vec![
            KeywordRule::new(Emotion::Happy, lists.happy),
            KeywordRule::new(Emotion::Sad, lists.sad),
            KeywordRule::new(Emotion::Angry, lists.angry),
            KeywordRule::new(Emotion::Surprised, lists.surprised),
        ])
    }
}

impl From<KeywordTable> for KeywordLists {
    fn from(table: KeywordTable) -> Self {
        let mut lists = KeywordLists::default();
        for rule in table.rules {
            let slot = match rule.emotion {
                Emotion::Happy => &mut lists.happy,
                Emotion::Sad => &mut lists.sad,
                Emotion::Angry => &mut lists.angry,
                Emotion::Surprised => &mut lists.surprised,
                other => {
                    tracing::warn!(emotion = %other, "dropping keyword rule with no on-disk slot");
                    continue;
                }
            };
            slot.extend(rule.keywords);
        }
        lists
    }
}

impl KeywordTable {
    pub fn from_rules(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn builtin(locale: Locale) -> Self {
        let lists = match locale {
            Locale::En => &tables::EN,
            Locale::Zh => &tables::ZH,
            Locale::Ja => &tables::JA,
        };
        Self::from_rules(vec![
            KeywordRule::new(Emotion::Happy, lists.happy),
            KeywordRule::new(Emotion::Sad, lists.sad),
            KeywordRule::new(Emotion::Angry, lists.angry),
            KeywordRule::new(Emotion::Surprised, lists.surprised),
        ])
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin(Locale::default())
    }
}
