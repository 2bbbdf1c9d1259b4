//! End-to-end index build and keyword search over a storage directory.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, SHIFT_JIS};
use tracing::info;

use crate::analysis::NgramTokenizer;
use crate::error::{Result, YubinError};
use crate::index::{IndexStats, builder, codec};
use crate::search;
use crate::storage::{self, MatchingLines};

/// Configuration shared by the builder, codec and query engine.
///
/// The postal master file ships as Shift-JIS and is indexed as bigrams;
/// tests substitute smaller alphabets and other widths.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// N-gram width used for indexing and keyword splitting.
    pub ngram: usize,

    /// Text encoding of both the data file and the index file.
    pub encoding: &'static Encoding,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            ngram: 2,
            encoding: SHIFT_JIS,
        }
    }
}

/// Outcome of a keyword search.
#[derive(Debug)]
pub enum SearchOutcome {
    /// No persisted index exists yet; the caller should ask for a build.
    NoIndex,

    /// Matching source rows, streamed in ascending row order.
    Rows(MatchingLines),
}

/// Builds and queries the postal-code index under one storage directory.
///
/// The directory is expected to contain the extracted data file (`*.csv`);
/// the index is written next to it as `<data file>.idx`. Acquiring the data
/// file (download, archive extraction) is the caller's concern.
///
/// Each call runs to completion on the calling thread; two processes must
/// not build into the same directory concurrently.
#[derive(Debug)]
pub struct SearchService {
    storage_dir: PathBuf,
    tokenizer: NgramTokenizer,
    config: SearchConfig,
}

impl SearchService {
    /// Create a service over `storage_dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Fails when the configured n-gram width is invalid or the directory
    /// cannot be created.
    pub fn new<P: AsRef<Path>>(storage_dir: P, config: SearchConfig) -> Result<Self> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        fs::create_dir_all(&storage_dir)?;
        let tokenizer = NgramTokenizer::new(config.ngram)?;
        Ok(SearchService {
            storage_dir,
            tokenizer,
            config,
        })
    }

    /// The storage directory this service operates on.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Build the index over the data file and persist it, fully replacing
    /// any previous index.
    ///
    /// # Errors
    ///
    /// Fails when no data file is present under the storage directory, or
    /// on any I/O failure while reading or writing.
    pub fn create_index(&self) -> Result<IndexStats> {
        let data_path = self.data_file_path()?;
        info!(data = %data_path.display(), "building index");

        let index = builder::build_from_path(&data_path, self.tokenizer.clone(), self.config.encoding)?;
        let index_path = storage::index_file_path(&data_path);
        codec::save(&index_path, &index, self.config.encoding)?;

        let stats = index.stats();
        info!(
            index = %index_path.display(),
            tokens = stats.token_count,
            postings = stats.posting_count,
            "index written"
        );
        Ok(stats)
    }

    /// Search the persisted index for rows containing `keyword`.
    ///
    /// Only index entries reachable from the keyword's tokens are loaded.
    /// A missing index is not an error; it yields
    /// [`SearchOutcome::NoIndex`].
    pub fn search(&self, keyword: &str) -> Result<SearchOutcome> {
        let Some(index_path) = storage::find_index_file(&self.storage_dir) else {
            return Ok(SearchOutcome::NoIndex);
        };

        let tokens: Vec<String> = self.tokenizer.split_keyword(keyword).collect();
        let rows = if tokens.is_empty() {
            Default::default()
        } else {
            let index = codec::load(&index_path, self.config.encoding, Some(&tokens))?;
            search::search_rows(keyword, &self.tokenizer, &index)
        };

        let data_path = self.data_file_path()?;
        let lines = storage::matching_lines(&data_path, self.config.encoding, &rows)?;
        Ok(SearchOutcome::Rows(lines))
    }

    fn data_file_path(&self) -> Result<PathBuf> {
        storage::find_data_file(&self.storage_dir)?.ok_or_else(|| {
            YubinError::storage(format!(
                "no data file found under {}; place the postal master file there first",
                self.storage_dir.display()
            ))
        })
    }
}
