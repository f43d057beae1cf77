use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind, Result};

/// Parsed query: words that score a document and words that exclude it.
/// Borrows from the raw query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query<'q> {
    pub plus_words: Vec<&'q str>,
    pub minus_words: Vec<&'q str>,
}

impl Query<'_> {
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct QueryWord<'q> {
    text: &'q str,
    is_minus: bool,
    is_stop: bool,
}

/// Query parser for converting raw query strings into plus/minus word sets
pub struct QueryParser {
    pub stop_words: StopWordFilter,
}

impl QueryParser {
    pub fn new(stop_words: StopWordFilter) -> Self {
        QueryParser { stop_words }
    }

    /// Parse a query string.
    /// - `"fluffy cat"` -> plus words
    /// - `"cat -collar"` -> `collar` excludes documents
    /// - `"--cat"`, `"-"`, `"a  b"` -> InvalidQuery
    ///
    /// With `dedupe` the tokens are sorted and deduplicated first, so both word
    /// lists come out sorted and unique.
    pub fn parse<'q>(&self, text: &'q str, dedupe: bool) -> Result<Query<'q>> {
        let mut words = split_into_words(text);
        if dedupe {
            words.sort_unstable();
            words.dedup();
        }

        let mut query = Query::default();
        for word in words {
            let query_word = self.parse_word(word)?;
            if query_word.is_stop {
                continue;
            }
            if query_word.is_minus {
                query.minus_words.push(query_word.text);
            } else {
                query.plus_words.push(query_word.text);
            }
        }

        Ok(query)
    }

    fn parse_word<'q>(&self, token: &'q str) -> Result<QueryWord<'q>> {
        if token.is_empty() {
            return Err(Error::new(ErrorKind::InvalidQuery, "query word is empty".to_string()));
        }

        let (text, is_minus) = match token.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (token, false),
        };

        if text.is_empty() || text.starts_with('-') || !is_valid_word(text) {
            return Err(Error::new(
                ErrorKind::InvalidQuery,
                format!("query word {:?} is invalid", token),
            ));
        }

        Ok(QueryWord {
            text,
            is_minus,
            is_stop: self.stop_words.is_stop_word(text),
        })
    }
}
