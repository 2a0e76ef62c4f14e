//! Jaro-Winkler similarity equality.

use rapidfuzz::distance::jaro_winkler;

/// Jaro-Winkler similarity (0.0 to 1.0) of two normalized values.
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    jaro_winkler::similarity(a.chars(), b.chars())
}

/// Predicate that treats values as equal when their similarity reaches
/// `threshold`.
pub fn jaro_winkler_match(threshold: f64) -> impl Fn(&str, &str) -> bool + Clone + Send + Sync {
    move |a: &str, b: &str| jaro_winkler_similarity(a, b) >= threshold
}

/// Normalize a value for comparison.
///
/// - Trims whitespace
/// - Converts to lowercase
/// - Collapses inner whitespace runs
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_after_normalization() {
        assert!((jaro_winkler_similarity("  LANG ", "lang") - 1.0).abs() < f64::EPSILON);
        assert!(
            (jaro_winkler_similarity("4761 Blossom  Glens", "4761 blossom glens") - 1.0).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn close_spellings_score_high() {
        let score = jaro_winkler_similarity("Katy", "Katie");
        assert!(score > 0.8, "Katy/Katie should score > 0.8, got {score}");
        assert!(score < 0.95, "Katy/Katie should score < 0.95, got {score}");
    }

    #[test]
    fn threshold_predicate() {
        let loose = jaro_winkler_match(0.8);
        let strict = jaro_winkler_match(0.95);
        assert!(loose("Katy", "Katie"));
        assert!(!strict("Katy", "Katie"));
        assert!(!loose("Brian", "Framingham"));
    }
}
