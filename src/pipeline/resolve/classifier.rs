//! Statistical classification of matched text.
//!
//! A multinomial naive Bayes model over bag-of-words counts, trained once
//! at startup on catalog phrases labelled with their disease names. The
//! corpus is the catalog keys and nothing else (one example per phrase), so
//! the model barely generalizes beyond near-identical phrasing; that is a
//! known limitation of the training data, not something to paper over with
//! invented examples.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::MatchResult;

use super::{Resolver, TrainingError};

/// Laplace smoothing constant.
const ALPHA: f64 = 1.0;

pub struct ClassifierResolver {
    catalog: Arc<Catalog>,
    model: BagOfWordsModel,
}

impl ClassifierResolver {
    /// Train the classifier on the catalog. Blocking startup step; a
    /// failure here must prevent the process from serving.
    pub fn train(catalog: Arc<Catalog>) -> Result<Self, TrainingError> {
        let model = {
            let examples: Vec<(Vec<String>, &str)> = catalog
                .entries()
                .iter()
                .map(|entry| (tokenize(&entry.phrase), entry.record.disease.as_str()))
                .collect();
            let model = BagOfWordsModel::train(&examples)?;
            tracing::info!(
                labels = model.labels.len(),
                vocabulary = model.vocabulary.len(),
                examples = examples.len(),
                "disease classifier trained"
            );
            model
        };
        Ok(Self { catalog, model })
    }
}

impl Resolver for ClassifierResolver {
    /// `best` is the first catalog occurrence of the predicted label.
    /// `similar` is computed independently: plain case-insensitive
    /// substring containment of the matched text anywhere in a catalog
    /// phrase (no word-boundary requirement), excluding the entry already
    /// chosen as best.
    fn resolve(&self, matched_text: &str) -> MatchResult {
        let text = matched_text.trim();
        if text.is_empty() {
            return MatchResult::not_found();
        }

        let Some(label) = self.model.predict(text) else {
            return MatchResult::not_found();
        };

        // Post-training every predicted label exists in the catalog, but a
        // miss here must degrade to the sentinel rather than panic.
        let Some(best_entry) = self.catalog.first_by_disease(label) else {
            tracing::warn!(%label, "predicted label missing from catalog");
            return MatchResult::not_found();
        };

        let needle = text.to_lowercase();
        let similar = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| entry.phrase != best_entry.phrase)
            .filter(|entry| entry.phrase.to_lowercase().contains(&needle))
            .map(|entry| entry.record.clone())
            .collect();

        MatchResult {
            best: best_entry.record.clone(),
            similar,
        }
    }
}

/// Multinomial naive Bayes over term counts.
struct BagOfWordsModel {
    /// Distinct labels in catalog insertion order; prediction ties break
    /// toward the earlier label.
    labels: Vec<String>,
    /// Token to feature index. Unseen query tokens are ignored.
    vocabulary: HashMap<String, usize>,
    log_prior: Vec<f64>,
    /// Smoothed log P(token | label), indexed [label][token].
    log_likelihood: Vec<Vec<f64>>,
}

impl BagOfWordsModel {
    fn train(examples: &[(Vec<String>, &str)]) -> Result<Self, TrainingError> {
        if examples.is_empty() {
            return Err(TrainingError::EmptyCorpus);
        }

        let mut labels: Vec<String> = Vec::new();
        let mut label_index: HashMap<&str, usize> = HashMap::new();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for (tokens, label) in examples {
            let label = *label;
            if !label_index.contains_key(label) {
                label_index.insert(label, labels.len());
                labels.push(label.to_string());
            }
            for token in tokens {
                let next = vocabulary.len();
                vocabulary.entry(token.clone()).or_insert(next);
            }
        }
        if vocabulary.is_empty() {
            return Err(TrainingError::DegenerateCorpus);
        }

        let n_labels = labels.len();
        let n_tokens = vocabulary.len();
        let mut doc_counts = vec![0usize; n_labels];
        let mut token_counts = vec![vec![0usize; n_tokens]; n_labels];
        let mut token_totals = vec![0usize; n_labels];
        for (tokens, label) in examples {
            let l = label_index[*label];
            doc_counts[l] += 1;
            for token in tokens {
                token_counts[l][vocabulary[token]] += 1;
                token_totals[l] += 1;
            }
        }

        let n_examples = examples.len() as f64;
        let log_prior = doc_counts
            .iter()
            .map(|&count| (count as f64 / n_examples).ln())
            .collect();
        let log_likelihood = (0..n_labels)
            .map(|l| {
                let denominator = token_totals[l] as f64 + ALPHA * n_tokens as f64;
                token_counts[l]
                    .iter()
                    .map(|&count| ((count as f64 + ALPHA) / denominator).ln())
                    .collect()
            })
            .collect();

        Ok(Self {
            labels,
            vocabulary,
            log_prior,
            log_likelihood,
        })
    }

    /// Single most likely label. `None` only for an untrained/empty label
    /// set, which training rules out.
    fn predict(&self, text: &str) -> Option<&str> {
        let tokens = tokenize(text);
        let mut best: Option<(usize, f64)> = None;
        for l in 0..self.labels.len() {
            let mut score = self.log_prior[l];
            for token in &tokens {
                if let Some(&t) = self.vocabulary.get(token) {
                    score += self.log_likelihood[l][t];
                }
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((l, score));
            }
        }
        best.map(|(l, _)| self.labels[l].as_str())
    }
}

/// Lowercased alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}
