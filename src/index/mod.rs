//! The in-memory inverted index and its builder and codec.

pub mod builder;
pub mod codec;

use ahash::AHashMap;
use serde::Serialize;

/// One entry of the inverted index: a token and its posting list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// The indexed token.
    pub token: String,

    /// Row numbers (1-based, strictly ascending) the token occurs in.
    pub rows: Vec<u32>,
}

/// An inverted index mapping tokens to posting lists.
///
/// Lookup order is irrelevant, but the on-disk representation is written in
/// first-insertion order, so entries are kept in a vector with a hashed
/// side table for lookup. Rebuilding from an unchanged source therefore
/// produces a byte-identical index file.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    entries: Vec<IndexEntry>,
    lookup: AHashMap<String, usize>,
}

/// Summary statistics about an index.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    /// Number of distinct tokens.
    pub token_count: usize,

    /// Total number of postings across all tokens.
    pub posting_count: usize,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Append `row` to the posting list for `token`.
    ///
    /// The row is not appended when it is already the list's last element,
    /// so a token repeated across fields of one row contributes a single
    /// posting. Rows must be added in ascending order.
    pub fn add_posting(&mut self, token: &str, row: u32) {
        match self.lookup.get(token) {
            Some(&slot) => {
                let rows = &mut self.entries[slot].rows;
                if rows.last() != Some(&row) {
                    rows.push(row);
                }
            }
            None => {
                self.lookup.insert(token.to_string(), self.entries.len());
                self.entries.push(IndexEntry {
                    token: token.to_string(),
                    rows: vec![row],
                });
            }
        }
    }

    /// Insert a complete entry, replacing the posting list if the token is
    /// already present. Used when loading a persisted index.
    pub fn insert_entry(&mut self, token: String, rows: Vec<u32>) {
        match self.lookup.get(&token) {
            Some(&slot) => self.entries[slot].rows = rows,
            None => {
                self.lookup.insert(token.clone(), self.entries.len());
                self.entries.push(IndexEntry { token, rows });
            }
        }
    }

    /// Get the posting list for an exact token, if present.
    pub fn get(&self, token: &str) -> Option<&[u32]> {
        self.lookup
            .get(token)
            .map(|&slot| self.entries[slot].rows.as_slice())
    }

    /// Iterate entries in first-insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    /// Number of distinct tokens in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute summary statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            token_count: self.entries.len(),
            posting_count: self.entries.iter().map(|e| e.rows.len()).sum(),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<u32>)> for InvertedIndex {
    fn from_iter<I: IntoIterator<Item = (S, Vec<u32>)>>(iter: I) -> Self {
        let mut index = InvertedIndex::new();
        for (token, rows) in iter {
            index.insert_entry(token.into(), rows);
        }
        index
    }
}

impl PartialEq for InvertedIndex {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for InvertedIndex {}
