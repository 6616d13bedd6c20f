use super::helpers::*;
use crate::annotate::{
    contains_directive, extract_directives, parse_response, sanitize, Emotion, Motion,
    ParsedResponse,
};
use proptest::prelude::*;

fn any_emotion() -> impl Strategy<Value = Emotion> {
    prop::sample::select(Emotion::ALL.to_vec())
}

fn any_motion() -> impl Strategy<Value = Motion> {
    prop::sample::select(Motion::ALL.to_vec())
}

/// Plain text with no brackets at all.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?\n\t]{0,40}"
}

/// Fragments that look like, or almost look like, directives.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        plain_text(),
        any_emotion().prop_map(|e| emotion_tag(e.as_str())),
        any_motion().prop_map(|m| motion_tag(m.as_str())),
        "[a-z]{1,8}".prop_map(|v| emotion_tag(&v)),
        "[a-z]{1,8}".prop_map(|v| motion_tag(&v)),
        prop::sample::select(vec!["[", "]", "[emotion:", "[MOTION:", "[emo", "tion:x]"])
            .prop_map(str::to_string),
    ]
}

fn reply() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..8).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn sanitized_text_has_no_directives(raw in reply()) {
        let text = sanitize(&raw);
        prop_assert!(!contains_directive(&text), "left a tag in {:?}", text);
        prop_assert_eq!(text.trim(), text.as_str());
        prop_assert!(!text.contains("  "));
    }

    #[test]
    fn parse_never_panics_and_stays_in_vocabulary(raw in reply()) {
        let parsed = parse_response(Some(raw.as_str()), &sample_rules());
        prop_assert!(Emotion::ALL.contains(&parsed.emotion));
        if let Some(motion) = parsed.motion {
            prop_assert!(Motion::ALL.contains(&motion));
        }
    }

    #[test]
    fn single_pass_strip_matches_repeated_removal(raw in reply()) {
        prop_assert_eq!(sanitize(&raw), sanitize_by_repeated_removal(&raw));
    }

    #[test]
    fn sanitize_is_idempotent(raw in reply()) {
        let once = sanitize(&raw);
        prop_assert_eq!(sanitize(&once), once.clone());
    }

    #[test]
    fn reparse_of_sanitized_text_goes_to_classifier(raw in reply()) {
        let first = parse_response(Some(raw.as_str()), &sample_rules());
        let again = extract_directives(&first.text);
        prop_assert_eq!(again.emotion, None);
        prop_assert_eq!(again.motion, None);
        prop_assert_eq!(again.text, first.text);
    }

    #[test]
    fn leading_valid_tag_always_wins(emotion in any_emotion(), motion in any_motion(), tail in reply()) {
        let raw = format!("{}{}{}", emotion_tag(emotion.as_str()), motion_tag(motion.as_str()), tail);
        let parsed = parse_response(Some(raw.as_str()), &sample_rules());
        prop_assert_eq!(parsed.emotion, emotion);
        prop_assert_eq!(parsed.motion, Some(motion));
    }

    #[test]
    fn tag_free_text_keeps_its_words(text in plain_text()) {
        let parsed = parse_response(Some(text.as_str()), &sample_rules());
        let expected: Vec<&str> = text.split_whitespace().collect();
        let actual: Vec<&str> = parsed.text.split_whitespace().collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(parsed.motion, None);
    }
}

#[test]
fn empty_input_is_exact_default() {
    assert_eq!(parse_response(Some(""), &sample_rules()), ParsedResponse::empty());
    assert_eq!(parse_response(None, &[]), ParsedResponse::empty());
}
