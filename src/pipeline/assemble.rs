//! Shapes a resolver's `MatchResult` into the stable response contract.

use crate::models::{DiseaseRecord, MatchResult, SymptomCheck};

/// Flatten the best record into the response and substitute the
/// "no similar diseases" placeholder when the secondary list is empty.
/// Pure data shaping; the catalog is never touched here.
pub fn assemble(result: MatchResult) -> SymptomCheck {
    let MatchResult { best, similar } = result;
    let similar_diseases = if similar.is_empty() {
        vec![DiseaseRecord::no_similar()]
    } else {
        similar
    };
    SymptomCheck {
        disease: best.disease,
        description: best.description,
        medicine: best.medicine,
        similar_diseases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(disease: &str) -> DiseaseRecord {
        DiseaseRecord {
            disease: disease.to_string(),
            description: format!("{disease} description"),
            medicine: "m".to_string(),
        }
    }

    #[test]
    fn flattens_best_record() {
        let check = assemble(MatchResult {
            best: record("Eczema"),
            similar: vec![record("Psoriasis")],
        });
        assert_eq!(check.disease, "Eczema");
        assert_eq!(check.description, "Eczema description");
        assert_eq!(check.similar_diseases.len(), 1);
        assert_eq!(check.similar_diseases[0].disease, "Psoriasis");
    }

    #[test]
    fn empty_similar_becomes_placeholder() {
        let check = assemble(MatchResult {
            best: record("Eczema"),
            similar: Vec::new(),
        });
        assert_eq!(check.similar_diseases, vec![DiseaseRecord::no_similar()]);
    }

    #[test]
    fn not_found_assembles_both_placeholders() {
        let check = assemble(MatchResult::not_found());
        assert_eq!(check.disease, "No disease found");
        assert_eq!(check.medicine, "N/A");
        assert_eq!(check.similar_diseases, vec![DiseaseRecord::no_similar()]);
    }
}
