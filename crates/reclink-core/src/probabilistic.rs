//! Fellegi-Sunter probabilistic matching.
//!
//! Every configured field contributes a log-likelihood ratio weight:
//!
//! - agreement: `ln(m / u)`
//! - disagreement: `ln((1 - m) / (1 - u))`
//!
//! where `m` is the probability the field agrees for a true match and `u` the
//! probability it agrees for a non-match. A field missing from either record
//! contributes nothing. The score is the sum of the weights: positive values
//! favour a match, negative values a non-match, and 0.0 is neutral.

use reclink_model::{Comparable, ComparisonError, Parameter, Result};
use tracing::{debug, trace};

use crate::breakdown::{FieldContribution, FieldOutcome, ScoreBreakdown};
use crate::comparator::FieldComparator;
use crate::matcher::Matcher;

/// Match/unmatch probabilities of one field.
#[derive(Debug, Clone)]
pub struct FieldProbability {
    /// Field name to compare.
    pub key: String,
    /// m: probability the field agrees given the records truly match.
    pub match_probability: f64,
    /// u: probability the field agrees given the records truly do not match.
    pub unmatch_probability: f64,
    /// Agreement test for this field.
    pub comparator: FieldComparator,
}

impl FieldProbability {
    /// Field compared with the default case-insensitive equality.
    pub fn new(key: impl Into<String>, match_probability: f64, unmatch_probability: f64) -> Self {
        Self {
            key: key.into(),
            match_probability,
            unmatch_probability,
            comparator: FieldComparator::default(),
        }
    }

    #[must_use]
    pub fn with_comparator(mut self, comparator: FieldComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Weight added when the field agrees: `ln(m / u)`.
    pub fn agreement_weight(&self) -> f64 {
        (self.match_probability / self.unmatch_probability).ln()
    }

    /// Weight added when the field disagrees: `ln((1 - m) / (1 - u))`.
    pub fn disagreement_weight(&self) -> f64 {
        ((1.0 - self.match_probability) / (1.0 - self.unmatch_probability)).ln()
    }

    /// Check that m and u lie strictly inside (0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InvalidProbability`] for the first
    /// parameter out of range. NaN is out of range.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            (Parameter::MatchProbability, self.match_probability),
            (Parameter::UnmatchProbability, self.unmatch_probability),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ComparisonError::InvalidProbability {
                    key: self.key.clone(),
                    parameter,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Compare this field on two records.
    fn evaluate(&self, a: &dyn Comparable, b: &dyn Comparable) -> Result<(FieldOutcome, f64)> {
        let (Some(left), Some(right)) = (a.get_field(&self.key), b.get_field(&self.key)) else {
            return Ok((FieldOutcome::Skipped, 0.0));
        };
        let equal =
            self.comparator
                .equals(left, right)
                .map_err(|source| ComparisonError::Predicate {
                    key: self.key.clone(),
                    source,
                })?;
        if equal {
            Ok((FieldOutcome::Agree, self.agreement_weight()))
        } else {
            Ok((FieldOutcome::Disagree, self.disagreement_weight()))
        }
    }
}

/// Sums Fellegi-Sunter field weights into a log-odds score.
///
/// [`ProbabilisticMatcher::new`] accepts any probabilities; an m or u of
/// exactly 0 or 1 then yields an infinite or NaN score.
/// [`ProbabilisticMatcher::try_new`] rejects such models up front.
#[derive(Debug, Clone, Default)]
pub struct ProbabilisticMatcher {
    fields: Vec<FieldProbability>,
}

impl ProbabilisticMatcher {
    /// Create a matcher without validating probabilities.
    pub fn new(fields: Vec<FieldProbability>) -> Self {
        Self { fields }
    }

    /// Create a matcher, rejecting any m or u outside (0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InvalidProbability`] for the first
    /// offending field.
    pub fn try_new(fields: Vec<FieldProbability>) -> Result<Self> {
        for field in &fields {
            field.validate()?;
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldProbability] {
        &self.fields
    }

    /// Lowest and highest achievable scores.
    ///
    /// The lowest is every field disagreeing, the highest every field
    /// agreeing, assuming all fields are present on both records.
    pub fn score_bounds(&self) -> (f64, f64) {
        self.fields.iter().fold((0.0, 0.0), |(low, high), field| {
            (
                low + field.disagreement_weight(),
                high + field.agreement_weight(),
            )
        })
    }

    /// Score a pair and report each field's contribution.
    ///
    /// # Errors
    ///
    /// Propagates the first error from a fallible comparator.
    pub fn explain(&self, a: &dyn Comparable, b: &dyn Comparable) -> Result<ScoreBreakdown> {
        let mut contributions = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let (outcome, weight) = field.evaluate(a, b)?;
            contributions.push(FieldContribution {
                key: field.key.clone(),
                outcome,
                weight,
            });
        }
        Ok(ScoreBreakdown { contributions })
    }
}

impl Matcher for ProbabilisticMatcher {
    fn compare(&self, a: &dyn Comparable, b: &dyn Comparable) -> Result<f64> {
        let mut score = 0.0;
        for field in &self.fields {
            let (outcome, weight) = field.evaluate(a, b)?;
            trace!(key = %field.key, %outcome, weight, "field compared");
            if outcome != FieldOutcome::Skipped {
                score += weight;
            }
        }
        debug!(score, fields = self.fields.len(), "probabilistic comparison");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use reclink_model::MapRecord;

    use super::*;

    const EPSILON: f64 = 1e-12;

    fn record(fields: &[(&str, &str)]) -> MapRecord {
        fields.iter().copied().collect()
    }

    #[test]
    fn weights_follow_fellegi_sunter() {
        let field = FieldProbability::new("dob", 0.95, 0.01);
        assert!((field.agreement_weight() - 95.0_f64.ln()).abs() < EPSILON);
        assert!((field.disagreement_weight() - (0.05_f64 / 0.99).ln()).abs() < EPSILON);
    }

    #[test]
    fn absent_field_is_neutral() {
        let matcher = ProbabilisticMatcher::new(vec![FieldProbability::new("ssn", 0.98, 0.01)]);
        let a = record(&[("ssn", "710359155")]);
        let b = record(&[("dob", "1980-10-04")]);
        assert_eq!(matcher.compare(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn default_comparator_ignores_case() {
        let matcher = ProbabilisticMatcher::new(vec![FieldProbability::new("lname", 0.9, 0.1)]);
        let a = record(&[("lname", "Lang")]);
        let b = record(&[("lname", "LANG")]);
        assert!((matcher.compare(&a, &b).unwrap() - 9.0_f64.ln()).abs() < EPSILON);
    }

    #[test]
    fn disagreement_is_negative_evidence() {
        let matcher = ProbabilisticMatcher::new(vec![FieldProbability::new("lname", 0.9, 0.1)]);
        let a = record(&[("lname", "Lang")]);
        let b = record(&[("lname", "Johnson")]);
        assert!((matcher.compare(&a, &b).unwrap() - (0.1_f64 / 0.9).ln()).abs() < EPSILON);
    }

    #[test]
    fn lax_constructor_propagates_infinity() {
        let matcher = ProbabilisticMatcher::new(vec![FieldProbability::new("ssn", 1.0, 0.0)]);
        let a = record(&[("ssn", "1")]);
        let b = record(&[("ssn", "2")]);
        assert_eq!(matcher.compare(&a, &a).unwrap(), f64::INFINITY);
        assert_eq!(matcher.compare(&a, &b).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn lax_constructor_propagates_nan() {
        let matcher = ProbabilisticMatcher::new(vec![FieldProbability::new("ssn", 0.0, 0.0)]);
        let a = record(&[("ssn", "1")]);
        assert!(matcher.compare(&a, &a).unwrap().is_nan());
    }

    #[test]
    fn try_new_rejects_degenerate_probabilities() {
        for (m, u, parameter) in [
            (1.0, 0.1, Parameter::MatchProbability),
            (0.0, 0.1, Parameter::MatchProbability),
            (0.9, 0.0, Parameter::UnmatchProbability),
            (0.9, 1.0, Parameter::UnmatchProbability),
            (0.9, f64::NAN, Parameter::UnmatchProbability),
        ] {
            let err = ProbabilisticMatcher::try_new(vec![
                FieldProbability::new("dob", 0.95, 0.01),
                FieldProbability::new("ssn", m, u),
            ])
            .unwrap_err();
            match err {
                ComparisonError::InvalidProbability {
                    key, parameter: p, ..
                } => {
                    assert_eq!(key, "ssn");
                    assert_eq!(p, parameter);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn try_new_accepts_valid_model() {
        let matcher = ProbabilisticMatcher::try_new(vec![FieldProbability::new("dob", 0.95, 0.01)])
            .expect("valid model");
        assert_eq!(matcher.fields().len(), 1);
    }

    #[test]
    fn fallible_comparator_error_propagates_with_key() {
        let comparator = FieldComparator::fallible("address_json", |a, b| {
            if a.starts_with('{') && b.starts_with('{') {
                Ok(a == b)
            } else {
                Err("address is not a JSON object".into())
            }
        });
        let matcher = ProbabilisticMatcher::new(vec![
            FieldProbability::new("address", 0.9, 0.1).with_comparator(comparator),
        ]);
        let good = record(&[("address", r#"{"zip": "73924"}"#)]);
        let bad = record(&[("address", "9993 Lola St")]);

        assert!(matcher.compare(&good, &good).is_ok());
        let err = matcher.compare(&good, &bad).unwrap_err();
        assert_eq!(err.key(), "address");
        assert!(matches!(err, ComparisonError::Predicate { .. }));
        assert!(matcher.explain(&good, &bad).is_err());
    }

    #[test]
    fn score_bounds_sum_weights() {
        let matcher = ProbabilisticMatcher::new(vec![
            FieldProbability::new("a", 0.9, 0.1),
            FieldProbability::new("b", 0.6, 0.2),
        ]);
        let (low, high) = matcher.score_bounds();
        assert!((high - (9.0_f64.ln() + 3.0_f64.ln())).abs() < EPSILON);
        assert!((low - ((0.1_f64 / 0.9).ln() + (0.4_f64 / 0.8).ln())).abs() < EPSILON);
    }

    #[test]
    fn explain_total_equals_compare() {
        let matcher = ProbabilisticMatcher::new(vec![
            FieldProbability::new("a", 0.9, 0.1),
            FieldProbability::new("b", 0.6, 0.2),
            FieldProbability::new("c", 0.95, 0.05),
        ]);
        let left = record(&[("a", "x"), ("b", "y")]);
        let right = record(&[("a", "x"), ("b", "z"), ("c", "w")]);
        let breakdown = matcher.explain(&left, &right).unwrap();
        assert_eq!(breakdown.total(), matcher.compare(&left, &right).unwrap());
        assert_eq!(breakdown.count(FieldOutcome::Skipped), 1);
    }
}
