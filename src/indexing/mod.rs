//! File collection for the analysis driver
//!
//! The walk is deliberately thin I/O: it gathers the ordered source list,
//! the extension histogram, and the tree snapshot that the extraction core
//! consumes, applying the exclude-pattern semantics shared with callers.

mod exclude;
mod files;

pub use exclude::{is_excluded, matches_pattern};
pub use files::{collect, should_skip_path, CollectedFiles};
