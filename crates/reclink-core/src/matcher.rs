use std::sync::Arc;

use reclink_model::{Comparable, Result};

/// Scores how strongly two records refer to the same entity.
///
/// Matchers are configured once and are immutable afterwards, so a single
/// instance can be shared across threads and called any number of times.
pub trait Matcher: Send + Sync {
    /// Compare two records and return a score.
    ///
    /// # Errors
    ///
    /// Built-in matchers only fail when a custom fallible comparator fails.
    fn compare(&self, a: &dyn Comparable, b: &dyn Comparable) -> Result<f64>;
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn compare(&self, a: &dyn Comparable, b: &dyn Comparable) -> Result<f64> {
        (**self).compare(a, b)
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn compare(&self, a: &dyn Comparable, b: &dyn Comparable) -> Result<f64> {
        (**self).compare(a, b)
    }
}
