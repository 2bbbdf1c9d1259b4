//! Character n-gram tokenizer.

use crate::error::{Result, YubinError};

/// A tokenizer that generates fixed-width character n-grams.
///
/// N-grams are the right unit for CJK substring search: the postal master
/// file has no word boundaries to split on.
///
/// Two splitting policies are exposed:
///
/// - [`split`](NgramTokenizer::split) for indexing: a sliding window of
///   width `n`, with the whole text as a single token when the text is
///   shorter than `n`.
/// - [`split_keyword`](NgramTokenizer::split_keyword) for querying: the same
///   sliding window, but falling back to single-character tokens when the
///   keyword is no longer than `n`, so that short keywords can still be
///   matched against wider index keys by substring containment.
///
/// # Examples
///
/// ```
/// use yubin::analysis::NgramTokenizer;
///
/// let tokenizer = NgramTokenizer::new(2).unwrap();
/// let tokens: Vec<String> = tokenizer.split("今日は雨").collect();
/// assert_eq!(tokens, vec!["今日", "日は", "は雨"]);
///
/// let tokens: Vec<String> = tokenizer.split_keyword("渋谷").collect();
/// assert_eq!(tokens, vec!["渋", "谷"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    /// N-gram width in characters.
    n: usize,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is 0.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(YubinError::invalid_argument(
                "ngram width must be at least 1",
            ));
        }
        Ok(Self { n })
    }

    /// Create a bigram tokenizer (n=2), the width used for the postal file.
    pub fn bigram() -> Self {
        Self { n: 2 }
    }

    /// The n-gram width of this tokenizer.
    pub fn width(&self) -> usize {
        self.n
    }

    /// Split `text` into n-grams for indexing.
    ///
    /// Yields `len - n + 1` tokens of width `n` when `len >= n`, the whole
    /// text as one token when `0 < len < n`, and nothing for empty text.
    pub fn split(&self, text: &str) -> Ngrams {
        let chars: Vec<char> = text.chars().collect();
        // A short text is indexed as itself, a single narrow token.
        let width = if !chars.is_empty() && chars.len() < self.n {
            chars.len()
        } else {
            self.n
        };
        Ngrams::new(chars, width)
    }

    /// Split a search keyword into query tokens.
    ///
    /// Keywords no longer than `n` split into single characters; longer
    /// keywords get the same sliding window as [`split`](Self::split).
    /// An empty keyword yields no tokens.
    pub fn split_keyword(&self, keyword: &str) -> Ngrams {
        let chars: Vec<char> = keyword.chars().collect();
        let width = if chars.len() <= self.n { 1 } else { self.n };
        Ngrams::new(chars, width)
    }
}

/// A lazy, finite iterator over the n-grams of a piece of text.
///
/// Each call to the tokenizer produces a fresh iterator; no scanning state
/// is shared between calls.
#[derive(Clone, Debug)]
pub struct Ngrams {
    chars: Vec<char>,
    width: usize,
    pos: usize,
}

impl Ngrams {
    fn new(chars: Vec<char>, width: usize) -> Self {
        Ngrams {
            chars,
            width,
            pos: 0,
        }
    }
}

impl Iterator for Ngrams {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let end = self.pos + self.width;
        if end > self.chars.len() {
            return None;
        }
        let token: String = self.chars[self.pos..end].iter().collect();
        self.pos += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.chars.len() + 1).saturating_sub(self.pos + self.width);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ngrams {}
