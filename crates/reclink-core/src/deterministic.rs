//! Exact identity-key matching.

use reclink_model::{Comparable, Result};
use tracing::{debug, trace};

use crate::matcher::Matcher;

/// Scores 1.0 when any identity key holds the same value on both records.
///
/// Keys are checked in configured order and evaluation stops at the first
/// exact match. A key missing from either record is skipped: it neither
/// matches nor forces a non-match. The score is always exactly 0.0 or 1.0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeterministicMatcher {
    keys: Vec<String>,
}

impl DeterministicMatcher {
    /// Create a matcher over the given identity keys.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// The identity keys, in evaluation order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The first key whose values are present and equal on both records.
    pub fn matching_key(&self, a: &dyn Comparable, b: &dyn Comparable) -> Option<&str> {
        for key in &self.keys {
            let (Some(left), Some(right)) = (a.get_field(key), b.get_field(key)) else {
                trace!(key = %key, "identity key absent, skipped");
                continue;
            };
            if left == right {
                return Some(key.as_str());
            }
        }
        None
    }
}

impl Matcher for DeterministicMatcher {
    fn compare(&self, a: &dyn Comparable, b: &dyn Comparable) -> Result<f64> {
        let score = match self.matching_key(a, b) {
            Some(key) => {
                debug!(key = %key, "identity key matched");
                1.0
            }
            None => 0.0,
        };
        Ok(score)
    }
}
