//! Whole-word containment search over catalog phrases.

use std::sync::Arc;

use regex::RegexBuilder;

use crate::catalog::Catalog;
use crate::models::MatchResult;

use super::Resolver;

/// Searches the (escaped) matched text as a whole-word pattern *inside*
/// each catalog phrase, case-insensitively. Intentionally asymmetric: the
/// short matched phrase is looked for within the longer catalog phrase,
/// never the reverse.
pub struct ContainmentResolver {
    catalog: Arc<Catalog>,
}

impl ContainmentResolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Resolver for ContainmentResolver {
    /// Hits are collected in catalog order: `best` is the first hit and
    /// `similar` holds every later hit whose disease name differs from the
    /// best. Duplicate disease names among those later hits are preserved;
    /// there is deliberately no dedup within `similar`.
    fn resolve(&self, matched_text: &str) -> MatchResult {
        let needle = matched_text.trim();
        if needle.is_empty() {
            // An empty pattern would word-boundary-match every phrase.
            return MatchResult::not_found();
        }

        let pattern = format!(r"\b{}\b", regex::escape(needle));
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(error) => {
                tracing::warn!(%error, "containment pattern failed to build");
                return MatchResult::not_found();
            }
        };

        let mut hits = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| regex.is_match(&entry.phrase));

        let Some(first) = hits.next() else {
            tracing::debug!(%needle, "no catalog phrase contains matched text");
            return MatchResult::not_found();
        };

        let best = first.record.clone();
        let similar = hits
            .filter(|entry| entry.record.disease != best.disease)
            .map(|entry| entry.record.clone())
            .collect();

        MatchResult { best, similar }
    }
}
