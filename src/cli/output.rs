//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, YubinArgs};
use crate::error::Result;

/// Result structure for index creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexCreationResult {
    pub storage_dir: String,
    pub token_count: usize,
    pub posting_count: usize,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub keyword: String,
    pub hit_count: usize,
    pub rows: Vec<String>,
    /// False when no index has been built yet.
    pub index_present: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &YubinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &YubinArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Print search hits for human consumption: the matching rows, verbatim.
pub fn output_search_results(results: &SearchResults, args: &YubinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for row in &results.rows {
                println!("{row}");
            }
            if args.verbosity() > 1 {
                println!("{} rows matched", results.hit_count);
            }
            Ok(())
        }
        OutputFormat::Json => output_json(results, args),
    }
}
