//! Single-letter guesses

use std::fmt;

/// A normalized (lowercase) alphabetic guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Parse raw player input into a letter
    ///
    /// Returns `None` unless `input` is exactly one alphabetic character whose
    /// lowercase form is itself a single character.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse("A").map(Letter::as_char), Some('a'));
    /// assert!(Letter::parse("ab").is_none());
    /// assert!(Letter::parse("7").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_char(ch)
    }

    /// Normalize a single character, `None` if it is not alphabetic
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if !ch.is_alphabetic() {
            return None;
        }

        let mut lower = ch.to_lowercase();
        let normalized = lower.next()?;
        if lower.next().is_some() {
            return None;
        }

        Some(Self(normalized))
    }

    /// The lowercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Uppercase form used for display
    #[must_use]
    pub fn display_char(self) -> char {
        self.0.to_uppercase().next().unwrap_or(self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases() {
        assert_eq!(Letter::parse("a").unwrap().as_char(), 'a');
        assert_eq!(Letter::parse("Q").unwrap().as_char(), 'q');
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Letter::parse("").is_none());
        assert!(Letter::parse("ab").is_none());
        assert!(Letter::parse("a ").is_none());
    }

    #[test]
    fn parse_rejects_non_alphabetic() {
        assert!(Letter::parse("1").is_none());
        assert!(Letter::parse("?").is_none());
        assert!(Letter::parse(" ").is_none());
        assert!(Letter::parse("❤").is_none());
    }

    #[test]
    fn parse_accepts_non_ascii_letters() {
        assert_eq!(Letter::parse("Ç").unwrap().as_char(), 'ç');
        assert_eq!(Letter::parse("é").unwrap().as_char(), 'é');
    }

    #[test]
    fn from_char_matches_parse() {
        assert_eq!(Letter::from_char('B'), Letter::parse("b"));
        assert!(Letter::from_char('-').is_none());
    }

    #[test]
    fn display_is_uppercase() {
        let letter = Letter::parse("m").unwrap();
        assert_eq!(letter.to_string(), "M");
    }
}
