pub mod assemble;
pub mod matcher;
pub mod normalize;
pub mod processor; // Symptom check orchestrator: the public entry point
pub mod resolve;
pub mod spelling;
