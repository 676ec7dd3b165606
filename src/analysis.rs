//! Analysis batch driver
//!
//! Fans per-file extraction out on a rayon worker pool, isolates
//! single-file failures, and reduces the partial results into one
//! `AnalysisResult` at a single aggregation point. For a fixed input file
//! set and fixed content the output is byte-identical across runs and
//! execution orders.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::aggregate;
use crate::error::{CodesiftError, Result};
use crate::extractors::{extractors_for, FileEntities};
use crate::indexing;
use crate::lang::{Dialect, Lang};
use crate::schema::{AnalysisResult, Query};
use crate::search::SearchFilter;

/// Result of one file's extraction pass
enum FileOutcome {
    Extracted(Vec<(Dialect, FileEntities)>),
    Failed(String),
}

/// Analyze a directory tree and return the complete result.
///
/// `InputNotFound` is the only fatal error: a missing root produces no
/// partial result. Everything else is recovered: unreadable files land in
/// `failed_files`, and a malformed search regex short-circuits the entity
/// batches while the rest of the result is still produced.
pub fn analyze(root: &Path, query: &Query, excludes: &[String]) -> Result<AnalysisResult> {
    if !root.is_dir() {
        return Err(CodesiftError::InputNotFound {
            path: root.display().to_string(),
        });
    }

    let collected = indexing::collect(root, excludes);

    let mut result = AnalysisResult {
        root: root.display().to_string(),
        file_types: collected.histogram,
        tree: collected.tree,
        ..Default::default()
    };

    let filter = match SearchFilter::compile(query) {
        Ok(f) => f,
        Err(e) => {
            // Every dialect batch shares the one user-supplied pattern, so
            // all of them come back empty rather than partially filtered.
            warn!("search pattern rejected, returning empty entity sets: {e}");
            return Ok(result);
        }
    };

    // Per-file extraction is embarrassingly parallel; collect() preserves
    // input order so the reduction below is deterministic.
    let outcomes: Vec<FileOutcome> = collected
        .sources
        .par_iter()
        .map(|(path, lang)| extract_file(path, *lang))
        .collect();

    let mut js_functions = Vec::new();
    let mut js_classes = Vec::new();
    let mut csharp_classes = Vec::new();
    let mut react_components = Vec::new();
    let mut vue_components = Vec::new();

    for outcome in outcomes {
        match outcome {
            FileOutcome::Extracted(parts) => {
                for (dialect, entities) in parts {
                    match dialect {
                        Dialect::CSharp => csharp_classes.extend(entities.classes),
                        Dialect::JavaScript => {
                            js_functions.extend(entities.functions);
                            js_classes.extend(entities.classes);
                        }
                        Dialect::React => react_components.extend(entities.components),
                        Dialect::Vue => vue_components.extend(entities.components),
                    }
                }
            }
            FileOutcome::Failed(path) => {
                result.failed_files.insert(path);
            }
        }
    }

    result.csharp_classes = filter.apply(aggregate::merge(csharp_classes));
    result.js_functions = filter.apply(aggregate::merge(js_functions));
    result.js_classes = filter.apply(aggregate::merge(js_classes));
    result.react_components = filter.apply(aggregate::merge(react_components));
    result.vue_components = filter.apply(aggregate::merge(vue_components));

    debug!(
        entities = result.total_entities(),
        failed = result.failed_files.len(),
        "analysis done"
    );
    Ok(result)
}

/// Read one file and run every applicable dialect extractor over its text.
///
/// The file is read once and the text shared across extractors, so a read
/// failure is recorded exactly once regardless of how many dialects would
/// have touched the file.
fn extract_file(path: &Path, lang: Lang) -> FileOutcome {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!(path = %path.display(), "skipping unreadable file: {e}");
            return FileOutcome::Failed(path.display().to_string());
        }
    };

    let file = path.display().to_string();
    let parts = extractors_for(lang)
        .into_iter()
        .map(|extractor| (extractor.dialect(), extractor.extract(&file, &source)))
        .collect();
    FileOutcome::Extracted(parts)
}
