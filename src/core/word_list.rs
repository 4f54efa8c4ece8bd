//! Candidate secret words

use super::{GameError, Word};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Immutable, deduplicated, non-empty collection of secret word candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a word list, dropping repeated words (first occurrence wins)
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if no words are supplied.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Word, WordList};
    ///
    /// let list = WordList::new(vec![Word::new("amor").unwrap(), Word::new("amor").unwrap()]).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// assert!(WordList::new(Vec::new()).is_err());
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// Choose one word uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction, so the range is never empty
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty lists are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(WordList::new(Vec::new()), Err(GameError::EmptyWordList));
    }

    #[test]
    fn duplicates_are_removed_in_order() {
        let list = WordList::new(words(&["doce", "amor", "doce", "broto", "amor"])).unwrap();
        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["doce", "amor", "broto"]);
    }

    #[test]
    fn case_variants_count_as_duplicates() {
        let list = WordList::new(words(&["Amor", "amor", "AMOR"])).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.contains("amor"));
    }

    #[test]
    fn pick_single_word_is_deterministic() {
        let list = WordList::new(words(&["amor"])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(list.pick(&mut rng).text(), "amor");
        }
    }

    #[test]
    fn pick_always_returns_member() {
        let list = WordList::new(words(&["beijo", "cacto", "feito", "moeda"])).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let picked = list.pick(&mut rng);
            assert!(list.contains(picked.text()));
        }
    }

    #[test]
    fn pick_reaches_every_word() {
        let list = WordList::new(words(&["beijo", "cacto", "feito"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            seen.insert(list.pick(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
