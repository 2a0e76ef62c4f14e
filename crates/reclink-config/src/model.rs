//! Matcher model files.
//!
//! A model file describes one matcher. Probabilistic models list their fields
//! with m/u probabilities and an optional comparator; deterministic models
//! list identity keys.
//!
//! ```toml
//! kind = "probabilistic"
//! strict = true
//!
//! [[fields]]
//! key = "fname"
//! match_probability = 0.60
//! unmatch_probability = 0.20
//! comparator = "phonetic"
//!
//! [[fields]]
//! key = "address"
//! match_probability = 0.90
//! unmatch_probability = 0.10
//! comparator = { jaro_winkler = { threshold = 0.92 } }
//! ```

use std::fs;
use std::path::Path;

use reclink_core::{
    DeterministicMatcher, FieldComparator, FieldProbability, Matcher, ProbabilisticMatcher,
};
use reclink_fuzzy::{jaro_winkler_match, phonetic_name_match};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

const INLINE_ORIGIN: &str = "<inline>";

/// Comparator selection for a probabilistic field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorConfig {
    #[default]
    CaseInsensitive,
    Exact,
    /// Double-metaphone name equality.
    Phonetic,
    /// Jaro-Winkler similarity at or above `threshold`.
    JaroWinkler { threshold: f64 },
}

impl ComparatorConfig {
    fn build(&self, key: &str) -> Result<FieldComparator> {
        Ok(match self {
            Self::CaseInsensitive => FieldComparator::CaseInsensitive,
            Self::Exact => FieldComparator::Exact,
            Self::Phonetic => FieldComparator::predicate("phonetic", phonetic_name_match),
            Self::JaroWinkler { threshold } => {
                if !(0.0..=1.0).contains(threshold) {
                    return Err(ConfigError::InvalidThreshold {
                        key: key.to_string(),
                        value: *threshold,
                    });
                }
                FieldComparator::predicate("jaro_winkler", jaro_winkler_match(*threshold))
            }
        })
    }
}

/// One weighted field of a probabilistic model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub key: String,
    pub match_probability: f64,
    pub unmatch_probability: f64,
    #[serde(default)]
    pub comparator: ComparatorConfig,
}

impl FieldConfig {
    /// Build the runtime field model.
    ///
    /// # Errors
    ///
    /// Fails when the comparator configuration is invalid.
    pub fn build(&self) -> Result<FieldProbability> {
        let comparator = self.comparator.build(&self.key)?;
        Ok(
            FieldProbability::new(&self.key, self.match_probability, self.unmatch_probability)
                .with_comparator(comparator),
        )
    }
}

/// A matcher model as stored on disk.
///
/// Unknown keys are rejected at every level, so a misspelled `strict` fails to
/// load instead of silently building a lax model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ModelConfig {
    Deterministic {
        keys: Vec<String>,
    },
    Probabilistic {
        /// Reject m/u outside (0, 1) when building.
        #[serde(default)]
        strict: bool,
        fields: Vec<FieldConfig>,
    },
}

impl ModelConfig {
    /// Load a model from a `.toml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, unknown extensions and parse errors.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading model");
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let text = match extension.as_deref() {
            Some("toml" | "json") => {
                fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?
            }
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        let origin = path.display().to_string();
        if extension.as_deref() == Some("json") {
            parse_json(&text, origin)
        } else {
            parse_toml(&text, origin)
        }
    }

    /// Parse a TOML model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        parse_toml(text, INLINE_ORIGIN.to_string())
    }

    /// Parse a JSON model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input.
    pub fn from_json_str(text: &str) -> Result<Self> {
        parse_json(text, INLINE_ORIGIN.to_string())
    }

    /// `"deterministic"` or `"probabilistic"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Deterministic { .. } => "deterministic",
            Self::Probabilistic { .. } => "probabilistic",
        }
    }

    /// Build whichever matcher this model describes.
    ///
    /// # Errors
    ///
    /// See [`ModelConfig::build_probabilistic`].
    pub fn build(&self) -> Result<Box<dyn Matcher>> {
        let matcher: Box<dyn Matcher> = match self {
            Self::Deterministic { .. } => Box::new(self.build_deterministic()?),
            Self::Probabilistic { .. } => Box::new(self.build_probabilistic()?),
        };
        Ok(matcher)
    }

    /// Build a deterministic matcher.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WrongKind`] for probabilistic models.
    pub fn build_deterministic(&self) -> Result<DeterministicMatcher> {
        match self {
            Self::Deterministic { keys } => Ok(DeterministicMatcher::new(keys.iter().cloned())),
            Self::Probabilistic { .. } => Err(ConfigError::WrongKind {
                expected: "deterministic",
                found: self.kind(),
            }),
        }
    }

    /// Build a probabilistic matcher.
    ///
    /// Strict models are validated eagerly. Lax models are accepted as
    /// written, with a warning for each field whose probabilities would
    /// produce infinite or NaN weights.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WrongKind`] for deterministic models,
    /// [`ConfigError::InvalidThreshold`] for bad comparator settings and
    /// [`ConfigError::Model`] for out-of-range probabilities in strict mode.
    pub fn build_probabilistic(&self) -> Result<ProbabilisticMatcher> {
        let Self::Probabilistic { strict, fields } = self else {
            return Err(ConfigError::WrongKind {
                expected: "probabilistic",
                found: self.kind(),
            });
        };
        let fields = fields
            .iter()
            .map(FieldConfig::build)
            .collect::<Result<Vec<_>>>()?;
        if *strict {
            return Ok(ProbabilisticMatcher::try_new(fields)?);
        }
        for field in &fields {
            if let Err(error) = field.validate() {
                warn!(key = %field.key, %error, "degenerate field probabilities");
            }
        }
        Ok(ProbabilisticMatcher::new(fields))
    }
}

fn parse_toml(text: &str, origin: String) -> Result<ModelConfig> {
    toml::from_str(text).map_err(|source| ConfigError::Toml { origin, source })
}

fn parse_json(text: &str, origin: String) -> Result<ModelConfig> {
    serde_json::from_str(text).map_err(|source| ConfigError::Json { origin, source })
}

#[cfg(test)]
mod tests {
    use reclink_core::{FieldOutcome, MapRecord};

    use super::*;

    #[test]
    fn comparator_defaults_to_case_insensitive() {
        let config = ModelConfig::from_toml_str(
            r#"
            kind = "probabilistic"
            [[fields]]
            key = "lname"
            match_probability = 0.9
            unmatch_probability = 0.1
            "#,
        )
        .unwrap();
        let matcher = config.build_probabilistic().unwrap();
        assert_eq!(matcher.fields()[0].comparator.name(), "case_insensitive");
    }

    #[test]
    fn jaro_winkler_comparator_from_toml() {
        let config = ModelConfig::from_toml_str(
            r#"
            kind = "probabilistic"
            [[fields]]
            key = "fname"
            match_probability = 0.6
            unmatch_probability = 0.2
            comparator = { jaro_winkler = { threshold = 0.8 } }
            "#,
        )
        .unwrap();
        let matcher = config.build_probabilistic().unwrap();
        let a = MapRecord::new().with_field("fname", "Katy");
        let b = MapRecord::new().with_field("fname", "Katie");
        let breakdown = matcher.explain(&a, &b).unwrap();
        assert_eq!(breakdown.contributions[0].outcome, FieldOutcome::Agree);
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let config = ModelConfig::from_toml_str(
            r#"
            kind = "probabilistic"
            [[fields]]
            key = "fname"
            match_probability = 0.6
            unmatch_probability = 0.2
            comparator = { jaro_winkler = { threshold = 1.5 } }
            "#,
        )
        .unwrap();
        let err = config.build_probabilistic().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold { .. }));
    }

    #[test]
    fn unknown_field_attribute_is_rejected() {
        let err = ModelConfig::from_toml_str(
            r#"
            kind = "probabilistic"
            [[fields]]
            key = "fname"
            match_probability = 0.6
            unmatch_probability = 0.2
            weight = 3.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn wrong_kind_is_reported() {
        let config = ModelConfig::from_json_str(r#"{"kind": "deterministic", "keys": ["ssn"]}"#)
            .unwrap();
        let err = config.build_probabilistic().unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a probabilistic model, found a deterministic model"
        );
    }
}
