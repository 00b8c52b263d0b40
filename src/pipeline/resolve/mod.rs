//! Disease resolution: matched symptom text to a best record plus
//! secondary hits.
//!
//! Two interchangeable policies exist behind the `Resolver` trait and a
//! deployment picks exactly one at construction time. Containment search is
//! deterministic and explainable; the classifier generalizes slightly
//! better to unseen phrasings but needs a one-time training step before the
//! first query.

pub mod classifier;
pub mod containment;

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::MatchResult;

pub use classifier::ClassifierResolver;
pub use containment::ContainmentResolver;

#[derive(Error, Debug)]
pub enum TrainingError {
    #[error("Classifier training corpus is empty")]
    EmptyCorpus,

    #[error("Classifier training corpus produced no usable tokens")]
    DegenerateCorpus,
}

/// A pure query from matched text to a `MatchResult`. Implementations never
/// fail at query time: "no match" is the not-found sentinel, not an error.
pub trait Resolver: Send + Sync {
    fn resolve(&self, matched_text: &str) -> MatchResult;
}

/// Resolution policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverStrategy {
    #[default]
    Containment,
    Classifier,
}

/// Construct the selected resolver. Classifier training happens here, as a
/// blocking startup step; a training failure must prevent serving.
pub fn build_resolver(
    strategy: ResolverStrategy,
    catalog: Arc<Catalog>,
) -> Result<Box<dyn Resolver>, TrainingError> {
    match strategy {
        ResolverStrategy::Containment => Ok(Box::new(ContainmentResolver::new(catalog))),
        ResolverStrategy::Classifier => Ok(Box::new(ClassifierResolver::train(catalog)?)),
    }
}
