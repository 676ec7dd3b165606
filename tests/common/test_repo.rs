//! Throwaway source-tree builder for integration tests

use std::fs;
use std::path::Path;

use codesift::{analyze, AnalysisResult, Query};
use tempfile::TempDir;

/// A temporary directory populated with source files
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Add a file at a relative path, creating parent directories
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write test file");
        self
    }

    /// Add a file with raw (possibly invalid UTF-8) bytes
    pub fn with_bytes(self, rel: &str, content: &[u8]) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write test file");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Analyze with an empty query
    pub fn analyze(&self) -> AnalysisResult {
        self.analyze_with(&Query::default(), &[])
    }

    /// Analyze with an explicit query and exclude patterns
    pub fn analyze_with(&self, query: &Query, excludes: &[String]) -> AnalysisResult {
        analyze(self.path(), query, excludes).expect("analysis should succeed")
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
