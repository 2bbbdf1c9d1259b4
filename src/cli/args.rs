//! Command line argument parsing for the yubin CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Yubin - n-gram full-text search over the Japanese postal-code file
///
/// With no keyword the index is (re)built from the data file under the
/// storage directory; with one keyword the index is searched and matching
/// rows are printed. More than one keyword is a usage error.
#[derive(Parser, Debug, Clone)]
#[command(name = "yubin")]
#[command(about = "N-gram full-text search over the Japanese postal-code file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct YubinArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Directory holding the data file and the index
    #[arg(short = 's', long, default_value = "storage", value_name = "DIR")]
    pub storage_dir: PathBuf,

    /// N-gram width used for indexing and keyword splitting
    #[arg(long, default_value = "2", value_name = "N")]
    pub ngram: usize,

    /// Keyword to search for; omit to rebuild the index
    #[arg(value_name = "KEYWORD")]
    pub keyword: Option<String>,
}

impl YubinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_keyword_means_build() {
        let args = YubinArgs::try_parse_from(["yubin"]).unwrap();
        assert!(args.keyword.is_none());
        assert_eq!(args.storage_dir, PathBuf::from("storage"));
        assert_eq!(args.ngram, 2);
    }

    #[test]
    fn test_single_keyword_means_search() {
        let args = YubinArgs::try_parse_from(["yubin", "渋谷"]).unwrap();
        assert_eq!(args.keyword.as_deref(), Some("渋谷"));
    }

    #[test]
    fn test_two_keywords_is_usage_error() {
        assert!(YubinArgs::try_parse_from(["yubin", "渋谷", "東京"]).is_err());
    }

    #[test]
    fn test_storage_dir_override() {
        let args =
            YubinArgs::try_parse_from(["yubin", "--storage-dir", "/tmp/yubin", "渋谷"]).unwrap();
        assert_eq!(args.storage_dir, PathBuf::from("/tmp/yubin"));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = YubinArgs::try_parse_from(["yubin"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = YubinArgs::try_parse_from(["yubin", "-vv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = YubinArgs::try_parse_from(["yubin", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = YubinArgs::try_parse_from(["yubin", "--format", "json", "渋谷"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
