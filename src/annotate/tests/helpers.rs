use crate::annotate::{Annotator, Emotion, KeywordRule};
use crate::locale::KeywordTable;

// ── Rule tables ─────────────────────────────────────────────

/// Small English table in the standard priority order.
pub fn sample_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(Emotion::Happy, ["great", "yay", "love"]),
        KeywordRule::new(Emotion::Sad, ["sorry", "aw"]),
        KeywordRule::new(Emotion::Angry, ["stop", "annoy"]),
        KeywordRule::new(Emotion::Surprised, ["whoa", "no way"]),
    ]
}

pub fn sample_annotator() -> Annotator {
    Annotator::new(KeywordTable::from_rules(sample_rules()))
}

// ── Tag builders ────────────────────────────────────────────

pub fn emotion_tag(value: &str) -> String {
    format!("[emotion:{}]", value)
}

pub fn motion_tag(value: &str) -> String {
    format!("[motion:{}]", value)
}

/// Slow reference for tag stripping: repeat regex removal until nothing is left.
pub fn sanitize_by_repeated_removal(raw: &str) -> String {
    let tag = regex::Regex::new(r"(?i)\[(?:emotion|motion):[^\[\]]*\]").unwrap();
    let whitespace = regex::Regex::new(r"\s{2,}").unwrap();
    let mut text = raw.to_string();
    while tag.is_match(&text) {
        text = tag.replace_all(&text, "").into_owned();
    }
    whitespace.replace_all(&text, " ").trim().to_string()
}
