//! Record model shared by the reclink matchers.

#![deny(unsafe_code)]

pub mod error;
pub mod record;

pub use error::{ComparisonError, Parameter, PredicateError, Result};
pub use record::{Comparable, MapRecord};
