//! Positional designators for heading-matching questions.
//!
//! Heading numerals are not stored with the question; they are derived from
//! the position of each heading in the option list at display time and again
//! at grading time. Reordering the headings changes what a stored numeral
//! means.

/// Value units processed largest to smallest by the subtractive algorithm.
const ROMAN_UNITS: [(u32, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// Render `value` as a lowercase Roman numeral.
///
/// For each unit, emit `value / unit` copies of its symbol, then subtract.
/// Returns an empty string for 0, matching the absence of a "zero" numeral.
pub fn to_roman(mut value: u32) -> String {
    let mut numeral = String::new();
    for (unit, symbol) in ROMAN_UNITS {
        let count = value / unit;
        for _ in 0..count {
            numeral.push_str(symbol);
        }
        value -= count * unit;
    }
    numeral
}

/// Numerals for a heading list of `count` entries: position 0 is `i`,
/// position 1 is `ii`, and so on.
pub fn heading_numerals(count: usize) -> Vec<String> {
    (1..=count as u32).map(to_roman).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_positions() {
        assert_eq!(heading_numerals(4), vec!["i", "ii", "iii", "iv"]);
    }

    #[test]
    fn test_subtractive_forms() {
        assert_eq!(to_roman(9), "ix");
        assert_eq!(to_roman(14), "xiv");
        assert_eq!(to_roman(40), "xl");
        assert_eq!(to_roman(90), "xc");
        assert_eq!(to_roman(1994), "mcmxciv");
    }

    #[test]
    fn test_additive_forms() {
        assert_eq!(to_roman(3), "iii");
        assert_eq!(to_roman(8), "viii");
        assert_eq!(to_roman(27), "xxvii");
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(to_roman(0), "");
        assert!(heading_numerals(0).is_empty());
    }
}
