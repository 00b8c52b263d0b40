pub mod catalog;
pub mod config;
pub mod models;
pub mod pipeline;

pub use catalog::{Catalog, CatalogError, SharedCatalog};
pub use models::{DiseaseRecord, MatchResult, SymptomCheck};
pub use pipeline::processor::{PipelineError, ResolverStrategy, SymptomPipeline};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embedding binaries (web layer, CLI harnesses).
///
/// Honors `RUST_LOG` when set, otherwise falls back to the crate default.
/// Library consumers that install their own subscriber should skip this.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Symptomatch v{}", config::APP_VERSION);
}
