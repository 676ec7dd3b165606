//! Per-dialect heuristic extractors
//!
//! Each dialect module drives its pattern table and the delimiter scanner
//! over one file's text and produces raw entities, before dedup and
//! sorting happen in the aggregator:
//! - `csharp`: classes with method members
//! - `javascript`: plain JS/TS functions and classes
//! - `react`: components (function/arrow/class) with hooks and props
//! - `vue`: single-file components with data/methods/computed sections
//!
//! Extraction is heuristic by design: patterns run independently, overlaps
//! are resolved downstream by first-found-wins dedup, and a candidate with
//! no recognizable body is still recorded with empty attributes.

pub mod common;
pub mod csharp;
pub mod javascript;
pub mod react;
pub mod vue;

use crate::lang::{Dialect, Lang};
use crate::schema::{ClassEntity, ComponentEntity, FunctionEntity};

/// Raw entities recovered from a single file by one dialect's pattern set
#[derive(Debug, Default)]
pub struct FileEntities {
    pub functions: Vec<FunctionEntity>,
    pub classes: Vec<ClassEntity>,
    pub components: Vec<ComponentEntity>,
}

impl FileEntities {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty() && self.components.is_empty()
    }
}

/// A source of structural entities for one file.
///
/// The extractors in this module implement it heuristically over raw text;
/// a grammar-backed extractor producing the same entity shapes plugs in
/// behind the same trait and is selected by file extension.
pub trait StructureExtractor: Sync {
    fn dialect(&self) -> Dialect;
    fn extract(&self, file: &str, source: &str) -> FileEntities;
}

static CSHARP: csharp::CSharpExtractor = csharp::CSharpExtractor;
static JAVASCRIPT: javascript::JavaScriptExtractor = javascript::JavaScriptExtractor;
static REACT: react::ReactExtractor = react::ReactExtractor;
static VUE: vue::VueExtractor = vue::VueExtractor;

/// Resolve the extractor for a dialect
pub fn extractor_for(dialect: Dialect) -> &'static dyn StructureExtractor {
    match dialect {
        Dialect::CSharp => &CSHARP,
        Dialect::JavaScript => &JAVASCRIPT,
        Dialect::React => &REACT,
        Dialect::Vue => &VUE,
    }
}

/// Extractors applicable to a file of the given language
pub fn extractors_for(lang: Lang) -> Vec<&'static dyn StructureExtractor> {
    lang.dialects().iter().map(|d| extractor_for(*d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_covers_all_dialects() {
        assert_eq!(extractor_for(Dialect::CSharp).dialect(), Dialect::CSharp);
        assert_eq!(extractor_for(Dialect::React).dialect(), Dialect::React);
        assert_eq!(extractors_for(Lang::Tsx).len(), 2);
        assert_eq!(extractors_for(Lang::Vue).len(), 1);
    }
}
