//! Model files for reclink matchers.
//!
//! Loads matcher models from TOML or JSON and builds the runtime matchers,
//! resolving comparator names (`phonetic`, `jaro_winkler`, ...) to the
//! predicates in `reclink-fuzzy`.

#![deny(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod model;

pub use builtin::{
    PATIENT_IDENTITY_KEYS, PATIENT_MODEL_TOML, patient_identity_matcher, patient_model,
    patient_model_config,
};
pub use error::{ConfigError, Result};
pub use model::{ComparatorConfig, FieldConfig, ModelConfig};
