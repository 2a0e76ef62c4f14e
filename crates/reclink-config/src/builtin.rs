//! Bundled patient linkage model.

use reclink_core::{DeterministicMatcher, ProbabilisticMatcher};

use crate::error::Result;
use crate::model::ModelConfig;

/// Source of the bundled probabilistic patient model.
pub const PATIENT_MODEL_TOML: &str = include_str!("../data/patient_model.toml");

/// Identity keys for deterministic patient matching, in evaluation order.
pub const PATIENT_IDENTITY_KEYS: [&str; 3] = ["ssn", "visitNumber", "medicalRecordNumber"];

/// The bundled patient model as configuration.
///
/// # Errors
///
/// Only fails if the bundled file is malformed.
pub fn patient_model_config() -> Result<ModelConfig> {
    ModelConfig::from_toml_str(PATIENT_MODEL_TOML)
}

/// Probabilistic matcher over address, dob, names, and patient identifiers.
///
/// First and last names are compared phonetically; everything else uses
/// case-insensitive equality.
///
/// # Errors
///
/// Only fails if the bundled file is malformed.
pub fn patient_model() -> Result<ProbabilisticMatcher> {
    patient_model_config()?.build_probabilistic()
}

/// Deterministic matcher over [`PATIENT_IDENTITY_KEYS`].
pub fn patient_identity_matcher() -> DeterministicMatcher {
    DeterministicMatcher::new(PATIENT_IDENTITY_KEYS)
}
