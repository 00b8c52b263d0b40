//! Word-boundary normalization for mashed-together symptom text.
//!
//! Users paste things like `"itchySkin rashAnd fever2days"`. This stage
//! restores word boundaries at camel-case and letter/digit seams and
//! collapses incidental whitespace runs. Pure and total: every string in,
//! some string out.

use std::sync::LazyLock;

use regex::Regex;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

static LOWER_DIGIT_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([0-9])").unwrap());

static DIGIT_LOWER_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])([a-z])").unwrap());

/// Insert boundary spaces and collapse whitespace runs between letters.
///
/// Idempotent: a second pass over already-normalized text is a no-op.
pub fn normalize(raw: &str) -> String {
    let text = CAMEL_BOUNDARY.replace_all(raw, "$1 $2");
    let text = LOWER_DIGIT_BOUNDARY.replace_all(&text, "$1 $2");
    let text = DIGIT_LOWER_BOUNDARY.replace_all(&text, "$1 $2");
    collapse_space_runs(&text)
}

/// Replace every whitespace run flanked by alphabetic characters with a
/// single space. Runs next to digits or punctuation stay as-is. A char scan
/// avoids the overlap problem a regex substitution has here (the trailing
/// letter of one match is also the leading letter of the next run).
fn collapse_space_runs(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            let start = i;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            let prev_is_letter = out.chars().next_back().is_some_and(|c| c.is_alphabetic());
            let next_is_letter = chars.get(i).is_some_and(|c| c.is_alphabetic());
            if prev_is_letter && next_is_letter {
                out.push(' ');
            } else {
                out.extend(&chars[start..i]);
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}
