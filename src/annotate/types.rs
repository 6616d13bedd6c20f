//! Closed vocabularies for directive tags and the parsed result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned by `FromStr` when a name is not in the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// ── Emotion ────────────────────────────────────────────────

/// Emotions the rendering layer knows how to animate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprised,
    #[default]
    Neutral,
    Relaxed,
    Thinking,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Neutral,
        Emotion::Relaxed,
        Emotion::Thinking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Neutral => "neutral",
            Emotion::Relaxed => "relaxed",
            Emotion::Thinking => "thinking",
        }
    }

    /// Case-insensitive membership test for a tag value.
    /// Returns `None` for anything outside the closed set.
    pub fn from_tag_value(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag_value(s).ok_or_else(|| UnknownVariant {
            kind: "emotion",
            value: s.to_string(),
        })
    }
}

// ── Motion ─────────────────────────────────────────────────

/// One-shot body motions the rendering layer can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    Wave,
    Nod,
    Shake,
    Idle,
}

impl Motion {
    pub const ALL: [Motion; 4] = [Motion::Wave, Motion::Nod, Motion::Shake, Motion::Idle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Motion::Wave => "wave",
            Motion::Nod => "nod",
            Motion::Shake => "shake",
            Motion::Idle => "idle",
        }
    }

    pub fn from_tag_value(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Motion {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag_value(s).ok_or_else(|| UnknownVariant {
            kind: "motion",
            value: s.to_string(),
        })
    }
}

// ── Parsed Response ────────────────────────────────────────

/// Display-ready result for one model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResponse {
    /// Reply text with every directive tag removed and whitespace normalized.
    pub text: String,
    /// Resolved emotion; `neutral` when neither a tag nor a keyword applies.
    pub emotion: Emotion,
    /// Motion cue, only ever taken from an explicit tag.
    pub motion: Option<Motion>,
}

impl ParsedResponse {
    /// The result for absent or empty input.
    pub fn empty() -> Self {
        Self::default()
    }
}
