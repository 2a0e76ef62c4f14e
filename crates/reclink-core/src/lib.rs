//! Record-linkage comparison engine.
//!
//! Two matchers score a pair of records:
//!
//! - [`DeterministicMatcher`]: 1.0 when any identity key (SSN, medical record
//!   number, ...) holds the same value on both records, else 0.0.
//! - [`ProbabilisticMatcher`]: Fellegi-Sunter log-likelihood ratio summed over
//!   weighted fields.
//!
//! Records are read through the [`Comparable`] trait. Matchers hold no
//! per-call state and never decide a match threshold; callers interpret the
//! score.
//!
//! # Example
//!
//! ```
//! use reclink_core::{FieldProbability, MapRecord, Matcher, ProbabilisticMatcher};
//!
//! let matcher = ProbabilisticMatcher::new(vec![
//!     FieldProbability::new("dob", 0.95, 0.01),
//!     FieldProbability::new("lname", 0.90, 0.10),
//! ]);
//! let a = MapRecord::new().with_field("dob", "1980-10-04").with_field("lname", "Framingham");
//! let b = MapRecord::new().with_field("dob", "1980-10-04");
//!
//! let score = matcher.compare(&a, &b).unwrap();
//! assert!((score - 95.0_f64.ln()).abs() < 1e-12);
//! ```

#![deny(unsafe_code)]

pub mod breakdown;
pub mod comparator;
pub mod deterministic;
pub mod matcher;
pub mod probabilistic;

pub use breakdown::{FieldContribution, FieldOutcome, ScoreBreakdown};
pub use comparator::{EqualityFn, FallibleEqualityFn, FieldComparator, eq_case_insensitive};
pub use deterministic::DeterministicMatcher;
pub use matcher::Matcher;
pub use probabilistic::{FieldProbability, ProbabilisticMatcher};
pub use reclink_model::{
    Comparable, ComparisonError, MapRecord, Parameter, PredicateError, Result,
};
