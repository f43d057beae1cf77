use std::collections::BTreeSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind, Result};

/// Immutable set of words excluded from both indexing and querying.
#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    stop_words: BTreeSet<String>,
}

impl StopWordFilter {
    /// Empty entries are dropped; any other entry must be a valid word.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = BTreeSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(Error::new(
                    ErrorKind::InvalidConfiguration,
                    format!("stop word {:?} contains control characters", word),
                ));
            }
            words.insert(word.to_string());
        }

        Ok(StopWordFilter { stop_words: words })
    }

    /// Build from a space separated list, e.g. `"and in on"`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}
