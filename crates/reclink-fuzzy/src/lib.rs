//! Phonetic and fuzzy equality predicates.
//!
//! Every predicate here has the shape `(a, b) -> bool` so it can be plugged
//! into a probabilistic field as a custom comparator. This crate knows
//! nothing about matchers or records.

#![deny(unsafe_code)]

pub mod phonetic;
pub mod similarity;

pub use phonetic::{PhoneticCodes, phonetic_codes, phonetic_name_match};
pub use similarity::{jaro_winkler_match, jaro_winkler_similarity};
