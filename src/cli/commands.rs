//! Command implementations for the yubin CLI.

use crate::cli::args::{OutputFormat, YubinArgs};
use crate::cli::output::*;
use crate::error::Result;
use crate::search::{SearchConfig, SearchOutcome, SearchService};

/// Execute the CLI: build the index when no keyword is given, search
/// otherwise.
pub fn execute_command(args: &YubinArgs) -> Result<()> {
    let config = SearchConfig {
        ngram: args.ngram,
        ..SearchConfig::default()
    };
    let service = SearchService::new(&args.storage_dir, config)?;

    match &args.keyword {
        None => create_index(&service, args),
        Some(keyword) => search(&service, keyword, args),
    }
}

/// Rebuild the index from the data file under the storage directory.
fn create_index(service: &SearchService, args: &YubinArgs) -> Result<()> {
    if args.verbosity() > 0 && matches!(args.output_format, OutputFormat::Human) {
        println!("Creating the index at: {}", service.storage_dir().display());
    }

    let stats = service.create_index()?;

    output_result(
        "Index created successfully",
        &IndexCreationResult {
            storage_dir: service.storage_dir().display().to_string(),
            token_count: stats.token_count,
            posting_count: stats.posting_count,
        },
        args,
    )
}

/// Search the index and print matching source rows.
fn search(service: &SearchService, keyword: &str, args: &YubinArgs) -> Result<()> {
    let results = match service.search(keyword)? {
        SearchOutcome::NoIndex => {
            if args.verbosity() > 0 && matches!(args.output_format, OutputFormat::Human) {
                println!("No index present. Build the index first by running with no keyword.");
            }
            SearchResults {
                keyword: keyword.to_string(),
                hit_count: 0,
                rows: Vec::new(),
                index_present: false,
            }
        }
        SearchOutcome::Rows(lines) => {
            let rows: Vec<String> = lines.collect();
            SearchResults {
                keyword: keyword.to_string(),
                hit_count: rows.len(),
                rows,
                index_present: true,
            }
        }
    };

    output_search_results(&results, args)
}
