//! Text analysis for the postal-code index.
//!
//! The only analyzer here is the character [`ngram::NgramTokenizer`]; the
//! postal master file is CJK text, so word-boundary tokenization is useless
//! and fixed-width n-grams are the unit of indexing and of querying.

pub mod ngram;

pub use ngram::NgramTokenizer;
