use proptest::prelude::*;

use reclink_fuzzy::{jaro_winkler_match, jaro_winkler_similarity, phonetic_name_match};

proptest! {
    #[test]
    fn phonetic_match_is_reflexive(name in "\\PC{0,12}") {
        prop_assert!(phonetic_name_match(&name, &name));
    }

    #[test]
    fn phonetic_match_is_symmetric(a in "\\PC{0,10}", b in "\\PC{0,10}") {
        prop_assert_eq!(phonetic_name_match(&a, &b), phonetic_name_match(&b, &a));
    }

    #[test]
    fn phonetic_match_ignores_accents(name in "[A-Za-z]{1,10}") {
        let accented: String = name
            .chars()
            .map(|c| match c {
                'e' => 'é',
                'E' => 'É',
                'a' => 'à',
                'n' => 'ñ',
                'u' => 'ü',
                other => other,
            })
            .collect();
        prop_assert!(phonetic_name_match(&name, &accented));
    }

    #[test]
    fn similarity_is_bounded(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let score = jaro_winkler_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
    }

    #[test]
    fn similarity_match_accepts_identical(name in "[a-z]{1,12}") {
        prop_assert!(jaro_winkler_match(0.99)(&name, &name.to_uppercase()));
    }
}

#[test]
fn patient_names() {
    assert!(phonetic_name_match("Katy", "Katie"));
    assert!(phonetic_name_match("Lang", "Lang"));
    assert!(!phonetic_name_match("Brian", "Julian"));
    assert!(phonetic_name_match("José", "Jose"));
    assert!(phonetic_name_match("İstanbul", "Istanbul"));
}
