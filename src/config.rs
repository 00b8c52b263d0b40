use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Symptomatch";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum similarity ratio (0-1 scale, 1.0 is exact) for a token to snap
/// to a vocabulary entry. Tolerates residual typos after spelling
/// correction without letting short unrelated tokens match arbitrarily.
pub const MIN_SIMILARITY: f64 = 0.8;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Path to the disease catalog JSON.
/// Overridable via SYMPTOMATCH_CATALOG for deployments that relocate it.
pub fn catalog_path() -> PathBuf {
    std::env::var_os("SYMPTOMATCH_CATALOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("disease.json"))
}
