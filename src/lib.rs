//! codesift: heuristic code structure analyzer
//!
//! This library recovers structural information (functions, classes, and
//! UI components with their parameters, props, hooks, and stateful
//! sections) from heterogeneous source files using per-dialect regex
//! pattern tables and a delimiter-balancing scanner instead of full
//! grammars, then supports free-text/regex search and highlighting over
//! the extracted entities.
//!
//! # Supported dialects
//!
//! - C# classes (method members with visibility and return-type text)
//! - JavaScript/TypeScript functions and classes
//! - React components (function, arrow, and class forms)
//! - Vue single-file components (options object and `<script setup>`)
//!
//! # Example
//!
//! ```ignore
//! use codesift::{analyze, Query};
//! use std::path::Path;
//!
//! let query = Query {
//!     search_term: "use".to_string(),
//!     ..Default::default()
//! };
//! let result = analyze(Path::new("my-app"), &query, &[])?;
//! for component in &result.react_components.entities {
//!     println!("{}: {:?}", component.name, component.hooks);
//! }
//! ```

pub mod aggregate;
pub mod analysis;
pub mod cli;
pub mod error;
pub mod extractors;
pub mod indexing;
pub mod lang;
pub mod patterns;
pub mod scanner;
pub mod schema;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use analysis::analyze;
pub use cli::{Cli, OutputFormat};
pub use error::{CodesiftError, Result};
pub use extractors::{extractor_for, extractors_for, FileEntities, StructureExtractor};
pub use lang::{Dialect, Lang};
pub use scanner::{body_of, scan_balanced, ScanOutcome};
pub use schema::{
    AnalysisResult, ClassEntity, ComponentEntity, EntitySet, FilterOutcome, FunctionEntity,
    MethodEntity, Query,
};
pub use search::{SearchFilter, Searchable, HIGHLIGHT_MARK};
