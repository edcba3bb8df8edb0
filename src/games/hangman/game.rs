use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

/// Wrong guesses allowed before the game is lost.
pub const MAX_MISTAKES: u8 = 9;

/// Case-folds a single character the way the guessed set stores it.
pub fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("no letter entered")]
    Empty,
    #[error("expected a single letter, got {0} characters")]
    TooLong(usize),
}

/// Parses one line of player input into a guessed letter.
pub fn parse_guess(line: &str) -> Result<char, InvalidGuess> {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Err(InvalidGuess::Empty),
        (Some(letter), None) => Ok(letter),
        (Some(_), Some(_)) => Err(InvalidGuess::TooLong(trimmed.chars().count())),
    }
}

/// Tracks which letters of the target word have been revealed.
#[derive(Debug, Clone)]
pub struct GuessTracker {
    word: String,
    guessed: BTreeSet<char>,
}

impl GuessTracker {
    /// Starts tracking `word` with its first and last letters already revealed.
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let mut guessed = BTreeSet::new();

        if let Some(first) = word.chars().next() {
            guessed.insert(fold(first));
        }
        if let Some(last) = word.chars().next_back() {
            guessed.insert(fold(last));
        }

        Self { word, guessed }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn record_guess(&mut self, letter: char) -> GuessOutcome {
        let letter = fold(letter);

        if self.word.chars().any(|c| fold(c) == letter) {
            self.guessed.insert(letter);
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.word
            .chars()
            .filter(|&c| c != ' ')
            .all(|c| self.guessed.contains(&fold(c)))
    }

    /// Renders the word with unrevealed letters masked, e.g. `"A _ _ _ e "`.
    pub fn render_progress(&self) -> String {
        let mut progress = String::with_capacity(self.word.len() * 2);

        for c in self.word.chars() {
            if c == ' ' {
                progress.push(' ');
            } else if self.guessed.contains(&fold(c)) {
                progress.push(c);
            } else {
                progress.push('_');
            }
            progress.push(' ');
        }

        progress
    }
}

/// A single game of hangman: the tracker plus the mistake counter.
#[derive(Debug, Clone)]
pub struct HangmanState {
    tracker: GuessTracker,
    mistakes: u8,
    status: GameStatus,
}

impl HangmanState {
    pub fn new(word: impl Into<String>) -> Self {
        let tracker = GuessTracker::new(word);
        let mut state = Self {
            tracker,
            mistakes: 0,
            status: GameStatus::Playing,
        };
        state.update_status();
        state
    }

    pub fn tracker(&self) -> &GuessTracker {
        &self.tracker
    }

    pub fn word(&self) -> &str {
        self.tracker.word()
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn apply_guess(&mut self, letter: char) -> GuessOutcome {
        debug_assert_eq!(self.status, GameStatus::Playing, "guess applied to a finished game");

        let outcome = self.tracker.record_guess(letter);
        if outcome == GuessOutcome::Incorrect {
            self.mistakes += 1;
        }

        self.update_status();
        debug!(%letter, ?outcome, mistakes = self.mistakes, status = ?self.status, "guess applied");
        outcome
    }

    fn update_status(&mut self) {
        self.status = if self.tracker.is_fully_revealed() {
            GameStatus::Won
        } else if self.mistakes >= MAX_MISTAKES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_and_last_letters_start_revealed() {
        let tracker = GuessTracker::new("Apple");
        assert_eq!(tracker.guessed().iter().copied().collect::<Vec<_>>(), vec!['a', 'e']);
        assert_eq!(tracker.render_progress(), "A _ _ _ e ");
    }

    #[test]
    fn correct_guess_reveals_every_occurrence() {
        let mut tracker = GuessTracker::new("Apple");
        assert_eq!(tracker.record_guess('p'), GuessOutcome::Correct);
        assert_eq!(tracker.guessed().iter().copied().collect::<Vec<_>>(), vec!['a', 'e', 'p']);
        assert_eq!(tracker.render_progress(), "A p p _ e ");
    }

    #[test]
    fn guesses_ignore_case() {
        let mut tracker = GuessTracker::new("Kazakhstan");
        assert_eq!(tracker.record_guess('Z'), GuessOutcome::Correct);
        assert!(tracker.guessed().contains(&'z'));
        assert_eq!(tracker.record_guess('q'), GuessOutcome::Incorrect);
        assert!(!tracker.guessed().contains(&'q'));
    }

    #[test]
    fn spaces_are_always_revealed() {
        let mut tracker = GuessTracker::new("ab ba");
        assert_eq!(tracker.render_progress(), "a _   _ a ");
        assert!(!tracker.is_fully_revealed());
        tracker.record_guess('B');
        assert!(tracker.is_fully_revealed());
        assert_eq!(tracker.render_progress(), "a b   b a ");

        tracker = GuessTracker::new("ox cat");
        assert_eq!(tracker.render_progress(), "o _   _ _ t ");
        tracker.record_guess('x');
        tracker.record_guess('c');
        tracker.record_guess('a');
        assert!(tracker.is_fully_revealed());
    }

    #[test]
    fn parse_guess_requires_one_character() {
        assert_eq!(parse_guess("  p \n"), Ok('p'));
        assert_eq!(parse_guess("ab"), Err(InvalidGuess::TooLong(2)));
        assert_eq!(parse_guess("   "), Err(InvalidGuess::Empty));
        assert_eq!(parse_guess("ё"), Ok('ё'));
    }

    #[test]
    fn nine_misses_lose_the_game() {
        let mut state = HangmanState::new("Gopher");
        for (i, letter) in "zxqwvjkyu".chars().enumerate() {
            assert_eq!(state.status(), GameStatus::Playing);
            assert_eq!(state.apply_guess(letter), GuessOutcome::Incorrect);
            assert_eq!(state.mistakes() as usize, i + 1);
        }
        assert_eq!(state.status(), GameStatus::Lost);
    }

    #[test]
    fn revealing_the_word_wins() {
        let mut state = HangmanState::new("Apple");
        state.apply_guess('x');
        state.apply_guess('p');
        assert_eq!(state.status(), GameStatus::Playing);
        state.apply_guess('L');
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.mistakes(), 1);
    }
}
