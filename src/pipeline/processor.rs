//! Symptom check orchestrator: the entry point the presentation layer calls.
//!
//! Drives the full pipeline: normalize → correct spelling → fuzzy-match
//! against the vocabulary → resolve → assemble. Construction can fail
//! (catalog load, classifier training); `check` itself is total and never
//! fails for any string input.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::models::SymptomCheck;
use crate::pipeline::assemble::assemble;
use crate::pipeline::matcher::match_symptoms;
use crate::pipeline::normalize::normalize;
use crate::pipeline::resolve::{build_resolver, Resolver, TrainingError};
use crate::pipeline::spelling::{correct_text, DictionaryCorrector, TokenCorrector};

pub use crate::pipeline::resolve::ResolverStrategy;

/// Startup failures. Either one must prevent the process from serving.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Catalog load failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Classifier training failed: {0}")]
    Training(#[from] TrainingError),
}

pub struct SymptomPipeline {
    catalog: Arc<Catalog>,
    corrector: Box<dyn TokenCorrector>,
    resolver: Box<dyn Resolver>,
}

impl SymptomPipeline {
    /// Build a pipeline over an already-loaded catalog with the built-in
    /// spelling dictionary.
    pub fn new(catalog: Arc<Catalog>, strategy: ResolverStrategy) -> Result<Self, TrainingError> {
        Self::with_corrector(catalog, strategy, Box::new(DictionaryCorrector))
    }

    /// Same, with a caller-supplied spelling capability.
    pub fn with_corrector(
        catalog: Arc<Catalog>,
        strategy: ResolverStrategy,
        corrector: Box<dyn TokenCorrector>,
    ) -> Result<Self, TrainingError> {
        let resolver = build_resolver(strategy, catalog.clone())?;
        Ok(Self {
            catalog,
            corrector,
            resolver,
        })
    }

    /// Load the catalog from disk and build the pipeline in one step.
    pub fn from_path(path: &Path, strategy: ResolverStrategy) -> Result<Self, PipelineError> {
        let catalog = Arc::new(Catalog::load(path)?);
        Ok(Self::new(catalog, strategy)?)
    }

    /// Resolve raw symptom text to a disease record. Total: every string,
    /// including the empty one, produces a response; "no match" surfaces
    /// as the sentinel record, never as an error.
    pub fn check(&self, raw: &str) -> SymptomCheck {
        let normalized = normalize(raw);
        let corrected = correct_text(&normalized, self.corrector.as_ref());
        let matched = match_symptoms(&corrected, self.catalog.vocabulary());
        tracing::debug!(%raw, %matched, "symptom text normalized, corrected, matched");

        let result = self.resolver.resolve(&matched);
        tracing::info!(
            disease = %result.best.disease,
            similar = result.similar.len(),
            "symptom check resolved"
        );
        assemble(result)
    }

    /// Autocomplete support: catalog phrases containing `query`,
    /// case-insensitively, in catalog order.
    pub fn autocomplete(&self, query: &str) -> Vec<String> {
        self.catalog.search_phrases(query)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "high fever": {"disease": "Influenza", "description": "Viral infection", "medicine": "Oseltamivir"},
        "fever with rash": {"disease": "Measles", "description": "Viral rash illness", "medicine": "Rest"},
        "itchy skin rash": {"disease": "Eczema", "description": "Skin inflammation", "medicine": "Cream"},
        "mild cough": {"disease": "Common Cold", "description": "Upper respiratory infection", "medicine": "Rest"}
    }"#;

    fn pipeline(strategy: ResolverStrategy) -> SymptomPipeline {
        let catalog = Arc::new(Catalog::from_json(SAMPLE).unwrap());
        SymptomPipeline::new(catalog, strategy).unwrap()
    }

    #[test]
    fn camel_case_input_resolves_to_eczema() {
        let check = pipeline(ResolverStrategy::Containment).check("itchySkin rash");
        assert_eq!(check.disease, "Eczema");
        assert_eq!(check.medicine, "Cream");
    }

    #[test]
    fn empty_input_resolves_to_not_found() {
        let check = pipeline(ResolverStrategy::Containment).check("");
        assert_eq!(check.disease, "No disease found");
        assert_eq!(check.similar_diseases[0].disease, "No similar diseases found");
    }

    #[test]
    fn typo_is_corrected_before_resolution() {
        let check = pipeline(ResolverStrategy::Containment).check("high feverr");
        assert_eq!(check.disease, "Influenza");
    }

    #[test]
    fn mashed_and_misspelled_input_resolves() {
        // normalize splits the camel seam, the corrector fixes the typo,
        // and containment search is case-insensitive.
        let check = pipeline(ResolverStrategy::Containment).check("highFeverr");
        assert_eq!(check.disease, "Influenza");
    }

    #[test]
    fn concatenated_token_snaps_to_vocabulary_phrase() {
        // "highfever" has no case seam and no dictionary correction; the
        // fuzzy matcher replaces it with the full vocabulary phrase.
        let check = pipeline(ResolverStrategy::Containment).check("highfever");
        assert_eq!(check.disease, "Influenza");
    }

    #[test]
    fn shared_word_yields_similar_diseases() {
        let check = pipeline(ResolverStrategy::Containment).check("fever");
        assert_eq!(check.disease, "Influenza");
        let names: Vec<&str> = check
            .similar_diseases
            .iter()
            .map(|r| r.disease.as_str())
            .collect();
        assert_eq!(names, ["Measles"]);
    }

    #[test]
    fn gibberish_resolves_to_not_found() {
        let check = pipeline(ResolverStrategy::Containment).check("zxqwv plomk");
        assert_eq!(check.disease, "No disease found");
    }

    #[test]
    fn never_panics_on_odd_input() {
        let pipeline = pipeline(ResolverStrategy::Containment);
        for input in ["🤒🤒", ",,,", "123 456", "  \t\n ", "a", "ﬁever (set?)"] {
            let _ = pipeline.check(input);
        }
    }

    #[test]
    fn classifier_strategy_end_to_end() {
        let check = pipeline(ResolverStrategy::Classifier).check("fever with rash");
        assert_eq!(check.disease, "Measles");
    }

    #[test]
    fn autocomplete_uses_catalog_order() {
        let pipeline = pipeline(ResolverStrategy::Containment);
        assert_eq!(pipeline.autocomplete("fev"), ["high fever", "fever with rash"]);
        assert_eq!(pipeline.autocomplete("cough"), ["mild cough"]);
        assert!(pipeline.autocomplete("xyz").is_empty());
    }

    #[test]
    fn from_path_loads_catalog() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let pipeline =
            SymptomPipeline::from_path(file.path(), ResolverStrategy::Containment).unwrap();
        assert_eq!(pipeline.catalog().len(), 4);
    }

    #[test]
    fn from_path_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = SymptomPipeline::from_path(
            &dir.path().join("absent.json"),
            ResolverStrategy::Containment,
        );
        assert!(matches!(result, Err(PipelineError::Catalog(_))));
    }
}
