//! Positional field extraction over a normalized CURP string.

use serde::{Deserialize, Serialize};

/// Length of a complete CURP.
pub const CURP_LENGTH: usize = 18;

/// Length of the leading block carrying all interpreted fields
/// (name letters, birth date, sex, entity).
pub const LEADING_LENGTH: usize = 13;

/// The positional fields of a CURP, extracted leniently.
///
/// Layout (0-indexed, half-open):
///
/// | offset | len | field |
/// |---|---|---|
/// | 0  | 1 | first-surname initial |
/// | 1  | 1 | internal vowel |
/// | 2  | 1 | second-surname initial |
/// | 3  | 1 | given-name initial |
/// | 4  | 6 | birth date `YYMMDD` |
/// | 10 | 1 | sex code |
/// | 11 | 2 | entity code |
/// | 13 | 3 | consonant block |
/// | 16 | 2 | homoclave |
///
/// A field is extracted only when the input covers its full range; anything
/// shorter yields an empty string. Extraction never fails, regardless of
/// input length or content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurpFields {
    pub first_surname_initial: String,
    pub internal_vowel: String,
    pub second_surname_initial: String,
    pub given_name_initial: String,
    pub birth_date: String,
    pub sex_code: String,
    pub entity_code: String,
    pub consonants: String,
    pub homoclave: String,
}

impl CurpFields {
    /// Extract every field the input is long enough to cover.
    ///
    /// Operates on characters, not bytes, so non-ASCII input is sliced
    /// safely and simply fails the downstream character-class checks.
    pub fn extract(normalized: &str) -> Self {
        let chars: Vec<char> = normalized.chars().collect();
        let take = |start: usize, end: usize| -> String {
            if chars.len() >= end {
                chars[start..end].iter().collect()
            } else {
                String::new()
            }
        };
        Self {
            first_surname_initial: take(0, 1),
            internal_vowel: take(1, 2),
            second_surname_initial: take(2, 3),
            given_name_initial: take(3, 4),
            birth_date: take(4, 10),
            sex_code: take(10, 11),
            entity_code: take(11, 13),
            consonants: take(13, 16),
            homoclave: take(16, 18),
        }
    }

    /// The four leading name letters as one block.
    pub fn name_letters(&self) -> String {
        let mut letters = String::with_capacity(4);
        letters.push_str(&self.first_surname_initial);
        letters.push_str(&self.internal_vowel);
        letters.push_str(&self.second_surname_initial);
        letters.push_str(&self.given_name_initial);
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_full_curp() {
        let fields = CurpFields::extract("AAAA850101HDFLRS09");
        assert_eq!(fields.name_letters(), "AAAA");
        assert_eq!(fields.birth_date, "850101");
        assert_eq!(fields.sex_code, "H");
        assert_eq!(fields.entity_code, "DF");
        assert_eq!(fields.consonants, "LRS");
        assert_eq!(fields.homoclave, "09");
    }

    #[test]
    fn short_input_yields_empty_fields() {
        let fields = CurpFields::extract("ABCDE");
        assert_eq!(fields.first_surname_initial, "A");
        assert_eq!(fields.given_name_initial, "D");
        assert_eq!(fields.birth_date, "");
        assert_eq!(fields.sex_code, "");
        assert_eq!(fields.entity_code, "");
        assert_eq!(fields.homoclave, "");
    }

    #[test]
    fn empty_input_yields_all_empty() {
        let fields = CurpFields::extract("");
        assert_eq!(fields, CurpFields::default());
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        let fields = CurpFields::extract("ÁÉÍÓÚÑ0101HDFLRS09");
        assert_eq!(fields.first_surname_initial, "Á");
        assert_eq!(fields.birth_date, "ÚÑ0101");
    }

    #[test]
    fn partial_date_is_not_extracted() {
        // 9 chars: the date range 4..10 is not fully covered.
        let fields = CurpFields::extract("AAAA85010");
        assert_eq!(fields.birth_date, "");
    }
}
