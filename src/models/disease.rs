use serde::{Deserialize, Serialize};

/// One reference entry: a disease with its description and the medicine
/// commonly dispensed for it. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub disease: String,
    pub description: String,
    /// Some catalog variants omit the medicine on secondary entries;
    /// default to empty rather than failing deserialization.
    #[serde(default)]
    pub medicine: String,
}

impl DiseaseRecord {
    /// Sentinel returned when no catalog entry matches. Surfaced to the
    /// caller as ordinary data, never as an error.
    pub fn not_found() -> Self {
        Self {
            disease: "No disease found".to_string(),
            description: "The given symptoms do not match any known disease.".to_string(),
            medicine: "N/A".to_string(),
        }
    }

    /// Placeholder entry emitted when the similar-diseases list is empty.
    pub fn no_similar() -> Self {
        Self {
            disease: "No similar diseases found".to_string(),
            description: "There are no similar diseases for the given symptoms.".to_string(),
            medicine: "N/A".to_string(),
        }
    }
}

/// Raw resolver output: the best-matching record plus secondary hits.
/// Built fresh per request and consumed by the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub best: DiseaseRecord,
    /// Secondary hits in catalog order. Never contains the not-found
    /// sentinel. Whether same-named duplicates appear here is a resolver
    /// policy (see the resolver implementations).
    pub similar: Vec<DiseaseRecord>,
}

impl MatchResult {
    pub fn not_found() -> Self {
        Self {
            best: DiseaseRecord::not_found(),
            similar: Vec::new(),
        }
    }
}

/// The stable response contract consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomCheck {
    pub disease: String,
    pub description: String,
    pub medicine: String,
    pub similar_diseases: Vec<DiseaseRecord>,
}
