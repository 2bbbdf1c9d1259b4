//! Query-time resolution of keywords against the inverted index.

pub mod service;

use std::collections::BTreeSet;

use crate::analysis::NgramTokenizer;
use crate::index::InvertedIndex;

pub use service::{SearchConfig, SearchOutcome, SearchService};

/// Collect the rows reachable from one query token: the union of posting
/// lists over every index key that contains the token as a substring.
///
/// Substring matching (rather than exact lookup) is what lets a query token
/// narrower than the index's n-gram width, such as a single-character
/// fallback token, still reach the wider keys it occurs in.
pub fn rows_for_token(token: &str, index: &InvertedIndex) -> BTreeSet<u32> {
    let mut rows = BTreeSet::new();
    for entry in index.entries() {
        if entry.token.contains(token) {
            rows.extend(entry.rows.iter().copied());
        }
    }
    rows
}

/// Resolve a keyword to the set of rows containing every one of its tokens.
///
/// The keyword is split with the tokenizer's keyword policy; each token's
/// candidate set is computed by [`rows_for_token`] and the sets are
/// intersected. An empty keyword matches nothing.
pub fn search_rows(
    keyword: &str,
    tokenizer: &NgramTokenizer,
    index: &InvertedIndex,
) -> BTreeSet<u32> {
    let mut tokens = tokenizer.split_keyword(keyword);
    let Some(first) = tokens.next() else {
        return BTreeSet::new();
    };

    let mut result = rows_for_token(&first, index);
    for token in tokens {
        if result.is_empty() {
            break;
        }
        let next = rows_for_token(&token, index);
        result = &result & &next;
    }
    result
}
