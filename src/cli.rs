//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::schema::Query;

/// Heuristic code structure analyzer
#[derive(Parser, Debug)]
#[command(name = "codesift")]
#[command(about = "Extracts functions, classes, and components from source trees and searches them")]
#[command(version)]
pub struct Cli {
    /// Root directory to analyze
    #[arg(value_name = "DIR")]
    pub root: PathBuf,

    /// Free-text search term applied over extracted entities
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Treat the search term as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Match case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Wrap matches in emphasis markers in the output
    #[arg(long)]
    pub highlight: bool,

    /// Exclude pattern (substring or simple glob); repeatable
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl Cli {
    /// Build the query spec from the search flags
    pub fn query_spec(&self) -> Query {
        Query {
            search_term: self.query.clone(),
            use_regex: self.regex,
            case_sensitive: self.case_sensitive,
            highlight_matches: self.highlight,
        }
    }
}
