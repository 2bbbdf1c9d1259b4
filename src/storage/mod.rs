//! File-system collaborators: encoding-aware file I/O, index/data file
//! discovery under a storage directory, and row lookup in the source file.
//!
//! The postal master file and its index are both stored in a legacy
//! single-byte Japanese encoding (Shift-JIS), so every read and write goes
//! through an explicit [`Encoding`].

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::error::{Result, YubinError};

/// Extension of a persisted index file.
pub const INDEX_FILE_EXTENSION: &str = "idx";

/// Extension of the source data file.
pub const DATA_FILE_EXTENSION: &str = "csv";

/// Read a whole file and decode it with `encoding`.
///
/// Undecodable byte sequences are replaced, not fatal; the index format
/// never round-trips through them.
pub fn read_to_string(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path)?;
    let (text, _, _) = encoding.decode(&bytes);
    Ok(text.into_owned())
}

/// Encode `text` with `encoding` and write it to `path`, replacing any
/// existing file. The file is fully written or the error is propagated;
/// no atomic rename is attempted.
pub fn write_string(path: &Path, text: &str, encoding: &'static Encoding) -> Result<()> {
    let (bytes, _, _) = encoding.encode(text);
    fs::write(path, &bytes)?;
    Ok(())
}

/// The path where the index for `data_path` is persisted: the data file
/// path with `.idx` appended.
pub fn index_file_path(data_path: &Path) -> PathBuf {
    let mut name = data_path.as_os_str().to_os_string();
    name.push(".");
    name.push(INDEX_FILE_EXTENSION);
    PathBuf::from(name)
}

/// Find the persisted index file under `dir`, searching recursively.
///
/// Returns `None` when no index exists yet; that is a normal state, not an
/// error.
pub fn find_index_file(dir: &Path) -> Option<PathBuf> {
    let mut found = Vec::new();
    collect_by_extension(dir, INDEX_FILE_EXTENSION, &mut found);
    found.sort();
    found.into_iter().next()
}

/// Find the single source data file under `dir`, searching recursively.
///
/// # Errors
///
/// Fails when more than one data file is present; the storage directory is
/// expected to hold exactly one extracted master file.
pub fn find_data_file(dir: &Path) -> Result<Option<PathBuf>> {
    let mut found = Vec::new();
    collect_by_extension(dir, DATA_FILE_EXTENSION, &mut found);
    match found.len() {
        0 => Ok(None),
        1 => Ok(found.pop()),
        n => Err(YubinError::storage(format!(
            "expected a single .{DATA_FILE_EXTENSION} file under {}, found {n}",
            dir.display()
        ))),
    }
}

fn collect_by_extension(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_by_extension(&path, extension, out);
        } else if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            out.push(path);
        }
    }
}

/// Stream the lines of `path` whose 1-based position is in `rows`, in
/// ascending position order.
///
/// The returned iterator is finite and owns its state; each call reads the
/// file afresh.
pub fn matching_lines(
    path: &Path,
    encoding: &'static Encoding,
    rows: &BTreeSet<u32>,
) -> Result<MatchingLines> {
    let text = read_to_string(path, encoding)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    Ok(MatchingLines {
        lines: lines.into_iter(),
        rows: rows.clone(),
        next_row: 1,
    })
}

/// Iterator over selected source-file lines, see [`matching_lines`].
#[derive(Debug)]
pub struct MatchingLines {
    lines: std::vec::IntoIter<String>,
    rows: BTreeSet<u32>,
    next_row: u32,
}

impl Iterator for MatchingLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for line in self.lines.by_ref() {
            let row = self.next_row;
            self.next_row += 1;
            if self.rows.contains(&row) {
                return Some(line);
            }
        }
        None
    }
}
