//! Per-field explanation of a probabilistic score.

use std::fmt;

use serde::Serialize;

/// How a single field took part in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOutcome {
    /// Both values present and equal: contributed `ln(m/u)`.
    Agree,
    /// Both values present and different: contributed `ln((1-m)/(1-u))`.
    Disagree,
    /// Absent on at least one side: contributed nothing.
    Skipped,
}

impl fmt::Display for FieldOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Agree => "agree",
            Self::Disagree => "disagree",
            Self::Skipped => "skipped",
        })
    }
}

/// Weight a field added to the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldContribution {
    pub key: String,
    pub outcome: FieldOutcome,
    /// Log-likelihood ratio added to the total (0.0 when skipped).
    pub weight: f64,
}

/// Score of a record pair, broken down by configured field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// One entry per configured field, in configuration order.
    pub contributions: Vec<FieldContribution>,
}

impl ScoreBreakdown {
    /// Sum of all contributions, in configuration order.
    ///
    /// Equal to the score returned by the matcher for the same pair.
    pub fn total(&self) -> f64 {
        let mut total = 0.0;
        for contribution in &self.contributions {
            if contribution.outcome != FieldOutcome::Skipped {
                total += contribution.weight;
            }
        }
        total
    }

    pub fn count(&self, outcome: FieldOutcome) -> usize {
        self.contributions
            .iter()
            .filter(|c| c.outcome == outcome)
            .count()
    }

    pub fn get(&self, key: &str) -> Option<&FieldContribution> {
        self.contributions.iter().find(|c| c.key == key)
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for contribution in &self.contributions {
            match contribution.outcome {
                FieldOutcome::Skipped => writeln!(f, "{}: skipped", contribution.key)?,
                outcome => writeln!(
                    f,
                    "{}: {} {:+.4}",
                    contribution.key, outcome, contribution.weight
                )?,
            }
        }
        write!(f, "total: {:+.4}", self.total())
    }
}
