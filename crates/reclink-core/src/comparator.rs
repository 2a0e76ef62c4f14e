//! Field-level equality tests.
//!
//! Each probabilistic field decides agreement with a [`FieldComparator`].
//! The default is case-insensitive string equality. Phonetic and fuzzy
//! comparators are supplied from outside as plain `(a, b) -> bool` functions,
//! so this crate never depends on a particular phonetic algorithm.

use std::fmt;
use std::sync::Arc;

use reclink_model::PredicateError;

/// Infallible equality predicate over two field values.
pub type EqualityFn = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Equality predicate that may reject its input.
pub type FallibleEqualityFn =
    Arc<dyn Fn(&str, &str) -> Result<bool, PredicateError> + Send + Sync>;

/// How two values of the same field are tested for agreement.
#[derive(Clone, Default)]
pub enum FieldComparator {
    /// Values agree when equal after lowercasing.
    #[default]
    CaseInsensitive,
    /// Values agree only when byte-for-byte equal.
    Exact,
    /// Custom predicate, e.g. a phonetic name match.
    Predicate { name: String, func: EqualityFn },
    /// Custom predicate whose errors propagate out of the matcher.
    Fallible {
        name: String,
        func: FallibleEqualityFn,
    },
}

impl FieldComparator {
    /// Wrap an infallible predicate under a display name.
    pub fn predicate<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Wrap a fallible predicate under a display name.
    pub fn fallible<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str, &str) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        Self::Fallible {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Short name used in logs and reports.
    pub fn name(&self) -> &str {
        match self {
            Self::CaseInsensitive => "case_insensitive",
            Self::Exact => "exact",
            Self::Predicate { name, .. } | Self::Fallible { name, .. } => name,
        }
    }

    /// Test two values for agreement.
    ///
    /// # Errors
    ///
    /// Only [`FieldComparator::Fallible`] can fail; its error is returned as is.
    pub fn equals(&self, a: &str, b: &str) -> Result<bool, PredicateError> {
        match self {
            Self::CaseInsensitive => Ok(eq_case_insensitive(a, b)),
            Self::Exact => Ok(a == b),
            Self::Predicate { func, .. } => Ok(func(a, b)),
            Self::Fallible { func, .. } => func(a, b),
        }
    }
}

impl fmt::Debug for FieldComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaseInsensitive => f.write_str("CaseInsensitive"),
            Self::Exact => f.write_str("Exact"),
            Self::Predicate { name, .. } => f.debug_tuple("Predicate").field(name).finish(),
            Self::Fallible { name, .. } => f.debug_tuple("Fallible").field(name).finish(),
        }
    }
}

/// Unicode-aware case-insensitive equality with an ASCII fast path.
///
/// Characters are lowercased one at a time, without context-sensitive rules
/// such as the Greek final sigma, so "ΟΔΟΣ" equals "οδοσ".
pub fn eq_case_insensitive(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
