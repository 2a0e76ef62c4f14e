//! Results of the `score` and `check` commands.

use anyhow::Result;
use reclink_config::{FieldConfig, ModelConfig};
use reclink_core::{Comparable, Matcher, ProbabilisticMatcher, ScoreBreakdown};
use serde::Serialize;
use tracing::{info, warn};

/// Score of one record pair.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub kind: &'static str,
    pub score: f64,
    /// Identity key that produced a deterministic match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_key: Option<String>,
    /// Per-field weights of a probabilistic score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Score `left` against `right` with the given model.
///
/// With `explain`, probabilistic scores carry a per-field breakdown.
pub fn score_pair(
    model: &ModelConfig,
    left: &dyn Comparable,
    right: &dyn Comparable,
    explain: bool,
) -> Result<ScoreReport> {
    let report = match model {
        ModelConfig::Deterministic { .. } => {
            let matcher = model.build_deterministic()?;
            let matching_key = matcher.matching_key(left, right);
            ScoreReport {
                kind: model.kind(),
                score: matching_key.map_or(0.0, |_| 1.0),
                matching_key: matching_key.map(str::to_string),
                breakdown: None,
            }
        }
        ModelConfig::Probabilistic { .. } => {
            let matcher = model.build_probabilistic()?;
            let (score, breakdown) = if explain {
                let breakdown = matcher.explain(left, right)?;
                (breakdown.total(), Some(breakdown))
            } else {
                (matcher.compare(left, right)?, None)
            };
            ScoreReport {
                kind: model.kind(),
                score,
                matching_key: None,
                breakdown,
            }
        }
    };
    info!(kind = report.kind, score = report.score, "scored record pair");
    Ok(report)
}

/// Weights of one probabilistic field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldWeights {
    pub key: String,
    pub comparator: String,
    pub match_probability: f64,
    pub unmatch_probability: f64,
    pub agreement_weight: f64,
    pub disagreement_weight: f64,
    /// Why the probabilities are unusable, if they are.
    pub problem: Option<String>,
}

/// Summary of a model for `reclink check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub kind: &'static str,
    /// Identity keys of a deterministic model.
    pub keys: Vec<String>,
    /// Fields of a probabilistic model.
    pub fields: Vec<FieldWeights>,
    /// Total-disagreement and total-agreement scores.
    pub score_bounds: Option<(f64, f64)>,
}

impl CheckReport {
    pub fn problem_count(&self) -> usize {
        self.fields.iter().filter(|f| f.problem.is_some()).count()
    }
}

/// Inspect a model without scoring anything.
///
/// Every field is checked, so all degenerate probabilities are reported at
/// once, even for strict models.
pub fn check_model(model: &ModelConfig) -> Result<CheckReport> {
    match model {
        ModelConfig::Deterministic { keys } => Ok(CheckReport {
            kind: model.kind(),
            keys: keys.clone(),
            fields: Vec::new(),
            score_bounds: None,
        }),
        ModelConfig::Probabilistic { fields, .. } => {
            let built = fields
                .iter()
                .map(FieldConfig::build)
                .collect::<Result<Vec<_>, _>>()?;
            let weights = built
                .iter()
                .map(|field| {
                    let problem = field.validate().err().map(|error| error.to_string());
                    if let Some(problem) = &problem {
                        warn!(key = %field.key, %problem, "degenerate field probabilities");
                    }
                    FieldWeights {
                        key: field.key.clone(),
                        comparator: field.comparator.name().to_string(),
                        match_probability: field.match_probability,
                        unmatch_probability: field.unmatch_probability,
                        agreement_weight: field.agreement_weight(),
                        disagreement_weight: field.disagreement_weight(),
                        problem,
                    }
                })
                .collect();
            let bounds = ProbabilisticMatcher::new(built).score_bounds();
            Ok(CheckReport {
                kind: model.kind(),
                keys: Vec::new(),
                fields: weights,
                score_bounds: Some(bounds),
            })
        }
    }
}
