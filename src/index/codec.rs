//! Persisting the inverted index.
//!
//! The on-disk format is one line per index entry: the token, double-quoted,
//! followed by the posting list as comma-separated bare integers. Posting
//! lists are gap-encoded: the first value is the first row number verbatim,
//! every following value is the difference from the previous row number.
//! `9000,9001,9007` is stored as `9000,1,6`.
//!
//! The token is always quoted, even when it needs no quoting, so a delimiter
//! character inside a token (possible in corrupted source text) can never be
//! mistaken for a field separator.

use std::path::Path;

use encoding_rs::Encoding;
use tracing::warn;

use crate::error::Result;
use crate::index::InvertedIndex;
use crate::storage;

/// Gap-encode a strictly ascending row-number list.
pub fn encode_gaps(rows: &[u32]) -> Vec<u32> {
    let mut gaps = Vec::with_capacity(rows.len());
    let mut previous = 0;
    for (i, &row) in rows.iter().enumerate() {
        if i == 0 {
            gaps.push(row);
        } else {
            gaps.push(row - previous);
        }
        previous = row;
    }
    gaps
}

/// Reconstruct a row-number list from its gap encoding.
pub fn decode_gaps<I: IntoIterator<Item = u32>>(gaps: I) -> Vec<u32> {
    let mut rows: Vec<u32> = Vec::new();
    for gap in gaps {
        let row = gap + rows.last().copied().unwrap_or(0);
        rows.push(row);
    }
    rows
}

/// Write `index` to `path`, one record per entry in entry order.
///
/// The whole file is encoded and written in one pass; on failure the
/// destination may be left truncated and the index must be rebuilt.
pub fn save(path: &Path, index: &InvertedIndex, encoding: &'static Encoding) -> Result<()> {
    let mut text = String::new();
    for entry in index.entries() {
        text.push('"');
        // CSV quoting: a literal quote inside the token is doubled.
        for ch in entry.token.chars() {
            if ch == '"' {
                text.push('"');
            }
            text.push(ch);
        }
        text.push('"');
        for gap in encode_gaps(&entry.rows) {
            text.push(',');
            text.push_str(&gap.to_string());
        }
        text.push('\n');
    }
    storage::write_string(path, &text, encoding)
}

/// Read an index back from `path`.
///
/// When `filter` is given, a record is skipped entirely unless its token
/// contains at least one of the filter substrings; a query only needs the
/// postings its own tokens can reach, which keeps large loads cheap.
///
/// A row-number field that does not parse as an integer is reported and
/// dropped from that entry; the load continues. A missing file is an I/O
/// error, an empty file is an empty index.
pub fn load(
    path: &Path,
    encoding: &'static Encoding,
    filter: Option<&[String]>,
) -> Result<InvertedIndex> {
    let text = storage::read_to_string(path, encoding)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut index = InvertedIndex::new();
    for record in reader.records() {
        let record = record?;
        let Some(token) = record.get(0) else {
            continue;
        };
        if let Some(keywords) = filter
            && !keywords.iter().any(|keyword| token.contains(keyword.as_str()))
        {
            continue;
        }

        let mut rows: Vec<u32> = Vec::with_capacity(record.len().saturating_sub(1));
        for value in record.iter().skip(1) {
            match value.parse::<u32>() {
                Ok(gap) => {
                    let row = gap + rows.last().copied().unwrap_or(0);
                    rows.push(row);
                }
                Err(_) => {
                    warn!(token, value, "row-number field is not an integer, dropped");
                }
            }
        }
        index.insert_entry(token.to_string(), rows);
    }
    Ok(index)
}
