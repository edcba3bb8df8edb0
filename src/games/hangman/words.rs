use rand::Rng;

const CLASSIC_WORDS: [&str; 7] = [
    "Zombi",
    "Gopher",
    "Russia",
    "Kazakhstan",
    "Apple",
    "Flower",
    "Orange",
];

pub type Word = String;

/// Fixed, never-empty set of candidate target words.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<Word>,
}

impl WordStore {
    /// The built-in word list.
    pub fn classic() -> Self {
        Self {
            words: CLASSIC_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Builds a store from `words`, or `None` if the list is empty.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Word>,
    {
        let words: Vec<Word> = words.into_iter().map(Into::into).collect();
        (!words.is_empty()).then_some(Self { words })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn pick_random_word<R: Rng>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())].clone()
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::classic()
    }
}
