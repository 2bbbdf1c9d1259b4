//! Building an inverted index from delimited-text rows.

use std::path::Path;

use ahash::AHashSet;
use encoding_rs::Encoding;
use tracing::debug;

use crate::analysis::NgramTokenizer;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::storage;

/// Accumulates rows into an [`InvertedIndex`].
///
/// Rows are numbered from 1 in the order they are added. Every field of a
/// row is tokenized independently; a token occurring several times within
/// one field contributes that row number once.
///
/// # Examples
///
/// ```
/// use yubin::analysis::NgramTokenizer;
/// use yubin::index::builder::IndexBuilder;
///
/// let mut builder = IndexBuilder::new(NgramTokenizer::bigram());
/// builder.add_row(["1000001", "東京都千代田区"]);
/// builder.add_row(["5450052", "大阪府大阪市"]);
/// let index = builder.into_index();
/// assert_eq!(index.get("東京"), Some(&[1][..]));
/// ```
#[derive(Debug)]
pub struct IndexBuilder {
    tokenizer: NgramTokenizer,
    index: InvertedIndex,
    next_row: u32,
}

impl IndexBuilder {
    /// Row numbering starts at 1.
    pub const FIRST_ROW: u32 = 1;

    /// Create a builder using the given tokenizer.
    pub fn new(tokenizer: NgramTokenizer) -> Self {
        IndexBuilder {
            tokenizer,
            index: InvertedIndex::new(),
            next_row: Self::FIRST_ROW,
        }
    }

    /// Add one row's fields to the index.
    pub fn add_row<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let row = self.next_row;
        for field in fields {
            let mut seen: AHashSet<String> = AHashSet::new();
            for token in self.tokenizer.split(field.as_ref()) {
                if seen.insert(token.clone()) {
                    self.index.add_posting(&token, row);
                }
            }
        }
        self.next_row += 1;
    }

    /// Number of rows added so far.
    pub fn row_count(&self) -> u32 {
        self.next_row - Self::FIRST_ROW
    }

    /// Finish building and return the index.
    pub fn into_index(self) -> InvertedIndex {
        self.index
    }
}

/// Build an index over every record of a delimited-text data file.
///
/// The file is decoded with `encoding` and parsed as comma-separated records
/// with quoted fields, the way the postal master file is distributed.
pub fn build_from_path(
    path: &Path,
    tokenizer: NgramTokenizer,
    encoding: &'static Encoding,
) -> Result<InvertedIndex> {
    let text = storage::read_to_string(path, encoding)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut builder = IndexBuilder::new(tokenizer);
    for record in reader.records() {
        let record = record?;
        builder.add_row(record.iter());
    }
    debug!(
        rows = builder.row_count(),
        tokens = builder.index.len(),
        "index built"
    );
    Ok(builder.into_index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::InvertedIndex;

    fn build(rows: &[&[&str]]) -> InvertedIndex {
        let mut builder = IndexBuilder::new(NgramTokenizer::bigram());
        for row in rows {
            builder.add_row(row.iter());
        }
        builder.into_index()
    }

    #[test]
    fn test_build_posting_lists() {
        let index = build(&[
            &["東京都", "渋谷"],
            &["大阪府"],
            &["東京都"],
        ]);

        assert_eq!(index.get("東京"), Some(&[1, 3][..]));
        assert_eq!(index.get("京都"), Some(&[1, 3][..]));
        assert_eq!(index.get("渋谷"), Some(&[1][..]));
        assert_eq!(index.get("大阪"), Some(&[2][..]));
        assert_eq!(index.get("阪府"), Some(&[2][..]));
    }

    #[test]
    fn test_duplicate_token_within_field_counted_once() {
        // "さささ" produces "ささ" twice; the posting appears once.
        let index = build(&[&["さささ"]]);
        assert_eq!(index.get("ささ"), Some(&[1][..]));
    }

    #[test]
    fn test_token_repeated_across_fields_counted_once() {
        let index = build(&[&["東京", "東京"]]);
        assert_eq!(index.get("東京"), Some(&[1][..]));
    }

    #[test]
    fn test_short_field_indexed_whole() {
        let index = build(&[&["あ"]]);
        assert_eq!(index.get("あ"), Some(&[1][..]));
    }

    #[test]
    fn test_empty_field_contributes_nothing() {
        let index = build(&[&[""]]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_posting_lists_strictly_ascending() {
        let index = build(&[&["東京"], &["東京"], &["奈良"], &["東京"]]);
        let rows = index.get("東京").unwrap();
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(rows, &[1, 2, 4]);
    }

    #[test]
    fn test_row_count() {
        let mut builder = IndexBuilder::new(NgramTokenizer::bigram());
        assert_eq!(builder.row_count(), 0);
        builder.add_row(["東京"]);
        builder.add_row(["大阪"]);
        assert_eq!(builder.row_count(), 2);
    }
}
