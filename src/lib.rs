//! # Yubin
//!
//! A lightweight full-text index over the rows of the Japanese postal-code
//! master file (KEN_ALL.CSV), so that rows containing a multi-character
//! keyword can be found without scanning the whole file.
//!
//! ## How it works
//!
//! - Every field of every row is split into character n-grams (bigrams by
//!   default), and each token maps to the ascending list of row numbers it
//!   occurs in.
//! - The index is persisted as a compact line-oriented text file with
//!   delta-encoded posting lists.
//! - At query time the keyword is split with the same token granularity,
//!   each token is resolved by substring matching against the index keys,
//!   and the per-token row sets are intersected.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod search;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
