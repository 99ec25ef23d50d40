//! Triplet Rendering
//!
//! A triplet is one base-1000 group of a numeral: a value 0-999 that the
//! forward codec renders as a phrase ("one hundred twenty-three") before
//! attaching the scale word for the group's position. Holding the group as
//! a typed small integer keeps the digit arithmetic away from string
//! slicing at group boundaries.

use entities_vocabulary::{ones_word, tens_word};

/// One base-1000 group of a numeral, value 0-999.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet(u16);

impl Triplet {
    /// Build a triplet from its three digit values (hundreds, tens, ones).
    ///
    /// Digit values above 9 are not representable in a digit string and are
    /// clamped by taking them modulo 10.
    pub fn from_digits(hundreds: u8, tens: u8, ones: u8) -> Self {
        let h = (hundreds % 10) as u16;
        let t = (tens % 10) as u16;
        let o = (ones % 10) as u16;
        Triplet(h * 100 + t * 10 + o)
    }

    /// The group's numeric value, 0-999.
    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    fn hundreds(self) -> usize {
        (self.0 / 100) as usize
    }

    fn tens(self) -> usize {
        (self.0 / 10 % 10) as usize
    }

    fn ones(self) -> usize {
        (self.0 % 10) as usize
    }

    /// Render the group as a lowercase phrase, without any scale word.
    ///
    /// A zero triplet renders as the empty string; the forward codec
    /// suppresses the whole group (scale word included) in that case.
    ///
    /// # Returns
    ///
    /// * Lowercase phrase such as `"one hundred twenty-three"`, or `""`.
    pub fn render(self) -> String {
        let mut phrase = String::new();

        let h = self.hundreds();
        if h != 0 {
            // ones_word covers 1-9 here; h is a single digit.
            phrase.push_str(ones_word(h).unwrap_or(""));
            phrase.push_str(" hundred");
        }

        let t = self.tens();
        let o = self.ones();
        let tail = if t == 1 {
            // Teens are one lookup covering both remaining digits.
            ones_word(10 + o).unwrap_or("").to_string()
        } else if t >= 2 {
            let mut s = tens_word(t).unwrap_or("").to_string();
            if o != 0 {
                s.push('-');
                s.push_str(ones_word(o).unwrap_or(""));
            }
            s
        } else if o != 0 {
            ones_word(o).unwrap_or("").to_string()
        } else {
            String::new()
        };

        if !tail.is_empty() {
            if !phrase.is_empty() {
                phrase.push(' ');
            }
            phrase.push_str(&tail);
        }

        phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(h: u8, t: u8, o: u8) -> String {
        Triplet::from_digits(h, t, o).render()
    }

    #[test]
    fn test_zero_triplet_renders_empty() {
        assert_eq!(render(0, 0, 0), "");
        assert!(Triplet::from_digits(0, 0, 0).is_zero());
    }

    #[test]
    fn test_ones_only() {
        assert_eq!(render(0, 0, 1), "one");
        assert_eq!(render(0, 0, 9), "nine");
    }

    #[test]
    fn test_teens_consume_both_digits() {
        assert_eq!(render(0, 1, 0), "ten");
        assert_eq!(render(0, 1, 3), "thirteen");
        assert_eq!(render(1, 1, 3), "one hundred thirteen");
    }

    #[test]
    fn test_tens_with_and_without_ones() {
        assert_eq!(render(0, 2, 0), "twenty");
        assert_eq!(render(0, 2, 3), "twenty-three");
        assert_eq!(render(0, 9, 9), "ninety-nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(render(1, 0, 0), "one hundred");
        assert_eq!(render(5, 0, 7), "five hundred seven");
        assert_eq!(render(9, 1, 2), "nine hundred twelve");
        assert_eq!(render(1, 2, 3), "one hundred twenty-three");
    }

    #[test]
    fn test_no_trailing_artifacts() {
        // "twenty" must not carry a stray hyphen or space.
        let word = render(0, 2, 0);
        assert!(!word.ends_with('-'));
        assert!(!word.ends_with(' '));
    }

    #[test]
    fn test_value() {
        assert_eq!(Triplet::from_digits(1, 2, 3).value(), 123);
        assert_eq!(Triplet::from_digits(0, 0, 0).value(), 0);
        assert_eq!(Triplet::from_digits(9, 9, 9).value(), 999);
    }
}
