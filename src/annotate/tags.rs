//! Directive tag extraction and text sanitization.
//!
//! Model replies may carry inline directives such as `[emotion:happy]` or
//! `[motion:wave]`. They can appear anywhere, be repeated, carry unknown
//! values, or be cut off. None of that is an error: the first valid tag of
//! each kind wins, every tag is stripped, and the rest is left to the
//! keyword fallback.

use super::classifier::{classify, KeywordRule};
use super::types::{Emotion, Motion, ParsedResponse};
use regex::Regex;
use std::sync::LazyLock;

// ── Patterns ───────────────────────────────────────────────

static EMOTION_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[emotion:([^\[\]]*)\]").expect("valid regex"));

static MOTION_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[motion:([^\[\]]*)\]").expect("valid regex"));

static ANY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(?:emotion|motion):[^\[\]]*\]").expect("valid regex"));

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Lowercase openers of every directive, for the stream hold-back check.
const DIRECTIVE_OPENERS: &[&str] = &["[emotion:", "[motion:"];

// ── Extraction ─────────────────────────────────────────────

/// What the extractor found in one reply, before any fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    pub text: String,
    pub emotion: Option<Emotion>,
    pub motion: Option<Motion>,
}

/// Value of the first tag matched by `re` that `accept` validates.
/// Invalid values are skipped and the scan continues.
fn first_valid<T>(re: &Regex, raw: &str, accept: impl Fn(&str) -> Option<T>) -> Option<T> {
    re.captures_iter(raw).find_map(|caps| {
        let value = caps.get(1).map_or("", |m| m.as_str());
        let parsed = accept(value);
        if parsed.is_none() {
            tracing::debug!(tag = &caps[0], "skipping directive with unknown value");
        }
        parsed
    })
}

/// Scan `raw` for emotion and motion directives and strip them.
///
/// Emotion and motion are resolved by two independent passes over the
/// unmodified input.
pub fn extract_directives(raw: &str) -> Directives {
    let emotion = first_valid(&EMOTION_TAG_RE, raw, Emotion::from_tag_value);
    let motion = first_valid(&MOTION_TAG_RE, raw, Motion::from_tag_value);

    Directives {
        text: sanitize(raw),
        emotion,
        motion,
    }
}

/// Remove every directive tag, valid or not, and normalize whitespace.
///
/// Runs of two or more whitespace characters become one space and the
/// result is trimmed. Removing an inner tag can never splice a new one
/// together: the text around it rejoins and is checked again.
pub fn sanitize(raw: &str) -> String {
    let stripped = strip_directives(raw);
    WHITESPACE_RUN_RE
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Single left-to-right pass that drops every bracket-free
/// `[emotion:...]` / `[motion:...]` span, including spans that only form once
/// an inner tag is gone.
fn strip_directives(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    // Offsets in `out` of unmatched `[`.
    let mut open: Vec<usize> = Vec::new();
    // Offsets in `out` of every bracket still present, ascending.
    let mut brackets: Vec<usize> = Vec::new();

    for ch in raw.chars() {
        match ch {
            '[' => {
                open.push(out.len());
                brackets.push(out.len());
                out.push('[');
            }
            ']' => {
                if let Some(start) = open.pop() {
                    let bracket_free = brackets.last() == Some(&start);
                    if bracket_free && is_directive_body(&out[start + 1..]) {
                        out.truncate(start);
                        brackets.pop();
                        continue;
                    }
                }
                brackets.push(out.len());
                out.push(']');
            }
            _ => out.push(ch),
        }
    }
    out
}

fn is_directive_body(body: &str) -> bool {
    let bytes = body.as_bytes();
    DIRECTIVE_OPENERS.iter().any(|opener| {
        let keyword = &opener.as_bytes()[1..];
        bytes.len() >= keyword.len() && bytes[..keyword.len()].eq_ignore_ascii_case(keyword)
    })
}

/// Whether `text` still holds anything shaped like a directive tag.
pub fn contains_directive(text: &str) -> bool {
    ANY_TAG_RE.is_match(text)
}

/// Full pipeline: extract directives, then fall back to keyword
/// classification when no valid emotion tag was present.
pub fn parse_response(raw: Option<&str>, rules: &[KeywordRule]) -> ParsedResponse {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return ParsedResponse::empty(),
    };

    let Directives {
        text,
        emotion,
        motion,
    } = extract_directives(raw);

    let emotion = match emotion {
        Some(emotion) => emotion,
        None => {
            tracing::debug!(chars = text.chars().count(), "no emotion directive, classifying text");
            classify(&text, rules)
        }
    };

    ParsedResponse {
        text,
        emotion,
        motion,
    }
}

// ── Streaming ──────────────────────────────────────────────

/// Byte position up to which partial streamed text is safe to show.
///
/// Holds back everything from the last `[` when it could be the start of a
/// directive that has not been closed yet. Complete tags before the boundary
/// still need [`sanitize`] before display.
pub fn safe_emit_boundary(partial: &str) -> usize {
    if let Some(last_bracket) = partial.rfind('[') {
        let suffix = &partial[last_bracket..];
        if !suffix.contains(']') && could_open_directive(suffix) {
            return last_bracket;
        }
    }
    partial.len()
}

fn could_open_directive(suffix: &str) -> bool {
    let bytes = suffix.as_bytes();
    DIRECTIVE_OPENERS.iter().any(|opener| {
        let n = bytes.len().min(opener.len());
        bytes[..n].eq_ignore_ascii_case(&opener.as_bytes()[..n])
    })
}
