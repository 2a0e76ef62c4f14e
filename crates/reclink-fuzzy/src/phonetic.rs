//! Double-metaphone name equality.

use deunicode::deunicode;
use rphonetic::{DoubleMetaphone, Encoder};

/// Primary and alternate double-metaphone codes of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticCodes {
    pub primary: String,
    pub alternate: String,
}

/// Encode a value with double metaphone.
///
/// The value is transliterated to ASCII first ("José" encodes as "Jose"); the
/// encoder indexes its input by byte and only handles ASCII.
pub fn phonetic_codes(value: &str) -> PhoneticCodes {
    let value = deunicode(value);
    let encoder = DoubleMetaphone::default();
    PhoneticCodes {
        primary: encoder.encode(&value),
        alternate: encoder.encode_alternate(&value),
    }
}

/// Two names agree when both their primary and alternate codes are equal.
///
/// Usable directly as a field comparator, e.g. "Katy" agrees with "Katie"
/// and "Smith" with "Smyth".
pub fn phonetic_name_match(a: &str, b: &str) -> bool {
    phonetic_codes(a) == phonetic_codes(b)
}
