//! Set label and card number sequencing.
//!
//! Cards are numbered 1..=999 within an alphabetic set label. When a set
//! fills up, the label advances and numbering restarts at 1. The allocator
//! is pure: its only input is the most recently created card, and the
//! caller is responsible for persisting the result. There is deliberately
//! no lock around "read latest, then insert"; concurrent generations can
//! race, and the unique constraint on (set_name, card_number) is the
//! backstop.

/// Set label for the very first card.
pub const DEFAULT_SET_NAME: &str = "GEN";

/// Highest card number within a single set.
pub const CARD_NUMBER_LIMIT: i32 = 999;

/// Compute the (set label, card number) for the next card given the most
/// recently created one.
pub fn next_set_and_number(last: Option<(&str, i32)>) -> (String, i32) {
    match last {
        None => (DEFAULT_SET_NAME.to_string(), 1),
        Some((set_name, number)) if number >= CARD_NUMBER_LIMIT => {
            (increment_set_label(set_name), 1)
        }
        Some((set_name, number)) => (set_name.to_string(), number + 1),
    }
}

/// Advance a set label alphabetically.
///
/// Uppercase-alphabetic labels are treated as bijective base-26 numerals:
/// `A -> B`, `Z -> AA`, `AZ -> BA`, `GEN -> GEO`, `ZZ -> AAA`. Labels of
/// any other shape are returned unchanged.
pub fn increment_set_label(label: &str) -> String {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_uppercase()) {
        return label.to_string();
    }

    let mut chars: Vec<u8> = label.bytes().collect();
    for c in chars.iter_mut().rev() {
        if *c == b'Z' {
            *c = b'A';
        } else {
            *c += 1;
            return String::from_utf8(chars).expect("ascii");
        }
    }
    // Every position carried over.
    chars.insert(0, b'A');
    String::from_utf8(chars).expect("ascii")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_card_starts_the_default_set() {
        assert_eq!(next_set_and_number(None), ("GEN".to_string(), 1));
    }

    #[test]
    fn numbers_advance_within_a_set() {
        assert_eq!(next_set_and_number(Some(("B", 5))), ("B".to_string(), 6));
        assert_eq!(
            next_set_and_number(Some(("GEN", 998))),
            ("GEN".to_string(), 999)
        );
    }

    #[test]
    fn full_set_rolls_the_label_forward() {
        assert_eq!(
            next_set_and_number(Some(("GEN", 999))),
            ("GEO".to_string(), 1)
        );
        assert_eq!(next_set_and_number(Some(("A", 999))), ("B".to_string(), 1));
    }

    #[test]
    fn increments_single_letters() {
        assert_eq!(increment_set_label("A"), "B");
        assert_eq!(increment_set_label("M"), "N");
        assert_eq!(increment_set_label("Y"), "Z");
    }

    #[test]
    fn z_rolls_over_to_aa() {
        assert_eq!(increment_set_label("Z"), "AA");
    }

    #[test]
    fn multi_letter_labels_advance_as_bijective_base_26() {
        assert_eq!(increment_set_label("AA"), "AB");
        assert_eq!(increment_set_label("AZ"), "BA");
        assert_eq!(increment_set_label("ZZ"), "AAA");
        assert_eq!(increment_set_label("GEN"), "GEO");
    }

    #[test]
    fn non_alphabetic_labels_are_unchanged() {
        assert_eq!(increment_set_label("A1"), "A1");
        assert_eq!(increment_set_label("gen"), "gen");
        assert_eq!(increment_set_label(""), "");
    }
}
