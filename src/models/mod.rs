pub mod disease;

pub use disease::{DiseaseRecord, MatchResult, SymptomCheck};
