//! Recursive source-file collection with histogram and tree snapshot
//!
//! Directory entries are visited in sorted order so the tree snapshot and
//! the source list are deterministic for a fixed input tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::indexing::exclude::is_excluded;
use crate::lang::Lang;

/// Everything the walk hands to the analysis driver
#[derive(Debug, Default)]
pub struct CollectedFiles {
    /// Supported source files paired with their detected language
    pub sources: Vec<(PathBuf, Lang)>,
    /// Count per file extension over the whole walked tree
    pub histogram: BTreeMap<String, usize>,
    /// Indented directory-tree snapshot
    pub tree: String,
}

/// Walk `root` and collect supported source files, applying the exclude
/// patterns to root-relative slash paths.
pub fn collect(root: &Path, excludes: &[String]) -> CollectedFiles {
    let mut out = CollectedFiles::default();
    let root_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(".");
    out.tree = format!("{}/\n", root_name);

    collect_recursive(root, root, excludes, 1, &mut out);

    debug!(
        sources = out.sources.len(),
        extensions = out.histogram.len(),
        "file collection done"
    );
    out
}

fn collect_recursive(
    root: &Path,
    dir: &Path,
    excludes: &[String],
    depth: usize,
    out: &mut CollectedFiles,
) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    paths.sort();

    for path in paths {
        if should_skip_path(&path) {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        if path.is_dir() {
            out.tree
                .push_str(&format!("{}{}/\n", "  ".repeat(depth), name));
            collect_recursive(root, &path, excludes, depth + 1, out);
        } else if path.is_file() {
            out.tree.push_str(&format!("{}{}\n", "  ".repeat(depth), name));

            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                *out.histogram.entry(ext.to_lowercase()).or_insert(0) += 1;
            }

            if is_excluded(&relative_slash_path(root, &path), excludes) {
                continue;
            }
            if let Ok(lang) = Lang::from_path(&path) {
                out.sources.push((path, lang));
            }
        }
    }
}

/// Root-relative path with forward slashes, for exclude matching
fn relative_slash_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Skip hidden entries and common non-source directories
pub fn should_skip_path(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        name.starts_with('.')
            || name == "node_modules"
            || name == "target"
            || name == "dist"
            || name == "build"
            || name == "coverage"
            || name == "__pycache__"
            || name == "vendor"
    } else {
        false
    }
}
