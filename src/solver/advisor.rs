//! Letter suggestions from the visible state of a round
//!
//! The advisor only looks at what a player can see: the revealed pattern and
//! the wrong letters. It never reads the secret word.

use crate::core::{Letter, PLACEHOLDER, RoundEngine, Word, WordList};
use rustc_hash::FxHashMap;

/// Suggests the next letter to guess
pub struct LetterAdvisor<'a> {
    words: &'a WordList,
}

impl<'a> LetterAdvisor<'a> {
    #[must_use]
    pub const fn new(words: &'a WordList) -> Self {
        Self { words }
    }

    /// Words from the list that are still consistent with the round
    ///
    /// A candidate has the same length, matches every revealed position, and
    /// holds no guessed letter (right or wrong) at a hidden position.
    #[must_use]
    pub fn candidates(&self, round: &RoundEngine) -> Vec<&'a Word> {
        let progress = round.progress();

        self.words
            .words()
            .iter()
            .filter(|word| word.len() == progress.len())
            .filter(|word| {
                word.chars().zip(&progress).all(|(ch, &shown)| {
                    if shown == PLACEHOLDER {
                        !round.has_guessed(ch)
                    } else {
                        ch.to_ascii_uppercase() == shown
                    }
                })
            })
            .collect()
    }

    /// The untried letter that appears in the most candidate words
    ///
    /// Ties go to the alphabetically first letter. With no candidates left the
    /// first untried letter from `a` to `z` is returned; `None` only once every
    /// one of them has been guessed.
    #[must_use]
    pub fn suggest(&self, round: &RoundEngine) -> Option<Letter> {
        let candidates = self.candidates(round);
        let frequencies = letter_frequencies(&candidates, round);

        let best = frequencies
            .into_iter()
            .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then(b.cmp(a)))
            .map(|(ch, _)| ch);

        best.or_else(|| ('a'..='z').find(|&ch| !round.has_guessed(ch)))
            .and_then(Letter::from_char)
    }
}

/// Count, for each untried letter, how many candidates contain it
#[must_use]
pub fn letter_frequencies(candidates: &[&Word], round: &RoundEngine) -> FxHashMap<char, usize> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();

    for word in candidates {
        for (i, ch) in word.chars().enumerate() {
            // Count each letter once per word
            if word.positions_of(ch).first() == Some(&i) && !round.has_guessed(ch) {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundStatus;
    use crate::wordlists::loader::words_from_slice;

    fn list(texts: &[&str]) -> WordList {
        WordList::new(words_from_slice(texts)).unwrap()
    }

    fn round_for(word: &str) -> RoundEngine {
        RoundEngine::new(&list(&[word]))
    }

    #[test]
    fn candidates_filter_by_length() {
        let words = list(&["amor", "doce", "beijo", "cacto"]);
        let advisor = LetterAdvisor::new(&words);
        let round = round_for("amor");

        let texts: Vec<&str> = advisor.candidates(&round).iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["amor", "doce"]);
    }

    #[test]
    fn candidates_match_revealed_positions() {
        let words = list(&["amor", "doce", "ador", "amar"]);
        let advisor = LetterAdvisor::new(&words);
        let mut round = round_for("amor");
        round.submit_guess("m").unwrap();

        let texts: Vec<&str> = advisor.candidates(&round).iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["amor", "amar"]);
    }

    #[test]
    fn candidates_exclude_discovered_letter_at_hidden_position() {
        // "amar" has a second 'a' where "amor" shows a placeholder
        let words = list(&["amor", "amar"]);
        let advisor = LetterAdvisor::new(&words);
        let mut round = round_for("amor");
        round.submit_guess("a").unwrap();

        let texts: Vec<&str> = advisor.candidates(&round).iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["amor"]);
    }

    #[test]
    fn candidates_exclude_wrong_letters() {
        let words = list(&["amor", "doce"]);
        let advisor = LetterAdvisor::new(&words);
        let mut round = round_for("amor");
        round.submit_guess("d").unwrap();

        let texts: Vec<&str> = advisor.candidates(&round).iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["amor"]);
    }

    #[test]
    fn frequencies_count_each_letter_once_per_word() {
        let words = list(&["macaco", "amor"]);
        let candidates: Vec<&Word> = words.words().iter().collect();
        let round = round_for("amor");

        let counts = letter_frequencies(&candidates, &round);
        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'c'), Some(&1));
        assert_eq!(counts.get(&'m'), Some(&2));
        assert_eq!(counts.get(&'r'), Some(&1));
    }

    #[test]
    fn suggest_picks_most_common_untried_letter() {
        let words = list(&["amor", "ator", "alor", "doce"]);
        let advisor = LetterAdvisor::new(&words);
        let round = round_for("amor");

        // 'o' is in all four candidates, 'a' and 'r' in three
        assert_eq!(advisor.suggest(&round).map(Letter::as_char), Some('o'));
    }

    #[test]
    fn suggest_skips_guessed_letters() {
        let words = list(&["amor", "ator", "alor"]);
        let advisor = LetterAdvisor::new(&words);
        let mut round = round_for("amor");
        round.submit_guess("a").unwrap();

        // 'o' and 'r' tie; alphabetical order breaks it
        assert_eq!(advisor.suggest(&round).map(Letter::as_char), Some('o'));
    }

    #[test]
    fn suggest_falls_back_to_alphabet() {
        let words = list(&["amor", "doce"]);
        let advisor = LetterAdvisor::new(&words);
        let round = RoundEngine::new(&list(&["xyz"]));

        // No same-length candidates in the advisor's list
        assert_eq!(advisor.suggest(&round).map(Letter::as_char), Some('a'));
    }

    #[test]
    fn following_suggestions_wins_with_own_list() {
        let words = list(&["amor", "doce", "broto", "beijo"]);
        let advisor = LetterAdvisor::new(&words);
        let mut round = round_for("broto");

        while round.status() == RoundStatus::InProgress {
            let letter = advisor.suggest(&round).unwrap();
            round.submit_guess(&letter.as_char().to_string()).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Won);
    }
}
