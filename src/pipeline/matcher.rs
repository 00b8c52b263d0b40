//! Fuzzy lookup of tokens against the catalog vocabulary.
//!
//! After normalization and spelling correction a token may still be a near
//! miss of a known symptom phrase. Each token is compared against every
//! vocabulary entry with a normalized similarity ratio; a close-enough hit
//! replaces the token, otherwise the token survives unchanged.

use strsim::normalized_levenshtein;

use crate::config::MIN_SIMILARITY;

/// A mathematically exact 0.8 ratio can land one ulp below the threshold
/// constant after f64 rounding, so the comparison carries a small slop.
const RATIO_EPSILON: f64 = 1e-9;

/// Replace each whitespace token with its closest vocabulary entry at or
/// above the similarity threshold. Token count is preserved; tokens with
/// no qualifying entry stay as they are.
pub fn match_symptoms(text: &str, vocabulary: &[String]) -> String {
    text.split_whitespace()
        .map(|token| match closest_match(token, vocabulary) {
            Some(hit) => hit.to_string(),
            None => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single closest vocabulary entry with similarity >= `MIN_SIMILARITY`.
/// Ties break by vocabulary insertion order: a later entry must score
/// strictly higher to displace an earlier one.
pub fn closest_match<'a>(token: &str, vocabulary: &'a [String]) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for entry in vocabulary {
        let ratio = normalized_levenshtein(token, entry);
        if ratio + RATIO_EPSILON < MIN_SIMILARITY {
            continue;
        }
        if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
            best = Some((entry, ratio));
        }
    }
    best.map(|(entry, _)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn near_miss_snaps_to_vocabulary() {
        let vocabulary = vocab(&["fever"]);
        assert_eq!(closest_match("feverr", &vocabulary), Some("fever"));
    }

    #[test]
    fn distant_token_does_not_match() {
        let vocabulary = vocab(&["fever"]);
        assert_eq!(closest_match("fv", &vocabulary), None);
    }

    #[test]
    fn accepts_exact_threshold_ratio() {
        // distance 1 over max length 5 is a ratio of exactly 0.80
        let vocabulary = vocab(&["abcde"]);
        assert_eq!(closest_match("abcd", &vocabulary), Some("abcde"));
    }

    #[test]
    fn rejects_below_threshold_ratio() {
        // distance 2 over max length 5 is 0.60
        let vocabulary = vocab(&["abcde"]);
        assert_eq!(closest_match("abc", &vocabulary), None);
    }

    #[test]
    fn exact_match_wins_over_near_miss() {
        let vocabulary = vocab(&["fevers", "fever"]);
        assert_eq!(closest_match("fever", &vocabulary), Some("fever"));
    }

    #[test]
    fn ties_break_by_insertion_order() {
        // "feverr" scores identically against both entries; the first wins.
        let vocabulary = vocab(&["fever", "fevers"]);
        assert_eq!(closest_match("feverr", &vocabulary), Some("fever"));

        let reversed = vocab(&["fevers", "fever"]);
        assert_eq!(closest_match("feverr", &reversed), Some("fevers"));
    }

    #[test]
    fn unmatched_tokens_survive() {
        let vocabulary = vocab(&["fever"]);
        assert_eq!(
            match_symptoms("mystery feverr symptoms", &vocabulary),
            "mystery fever symptoms"
        );
    }

    #[test]
    fn token_count_is_preserved() {
        let vocabulary = vocab(&["high fever", "mild cough"]);
        let input = "sudden feverr with coughing fits";
        let output = match_symptoms(input, &vocabulary);
        assert_eq!(
            output.split_whitespace().count(),
            input.split_whitespace().count()
        );
    }

    #[test]
    fn empty_text_and_empty_vocabulary() {
        assert_eq!(match_symptoms("", &vocab(&["fever"])), "");
        assert_eq!(match_symptoms("fever", &[]), "fever");
    }
}
