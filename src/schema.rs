//! Entity data model shared by extraction, search, and output
//!
//! Entities are created once per discovery pass over a fixed snapshot of
//! file contents and are immutable afterwards; highlighting operates on
//! copies produced at render time, never on the stored entity.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A plain function recovered from JS/TS source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEntity {
    pub name: String,
    pub file: String,
    /// Parameter text split on top-level commas, trimmed
    pub parameters: Vec<String>,
}

/// A method member of an extracted class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntity {
    pub name: String,
    /// Raw return-type text; empty when the dialect carries none
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub return_type: String,
    pub is_public: bool,
    pub is_static: bool,
    pub parameters: Vec<String>,
}

/// A class with its method members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntity {
    pub name: String,
    pub file: String,
    /// Inheritance-clause text split on commas (base class, interfaces)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<String>,
    pub methods: Vec<MethodEntity>,
}

/// A UI component (React function/arrow/class or Vue SFC)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntity {
    pub name: String,
    pub file: String,
    pub props: Vec<String>,
    /// Hook names found in the component body, sorted alphabetically
    pub hooks: Vec<String>,
    /// Stateful-dialect sections; empty for function/class components
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub computed: Vec<String>,
    /// True when declared via the single-block setup style rather than an
    /// explicit options object
    #[serde(default)]
    pub setup_syntax: bool,
}

/// How a filtered entity set should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOutcome {
    /// No entities of this kind existed before filtering
    NothingExtracted,
    /// Entities existed but the query matched none of them
    AllFilteredOut,
    /// At least one entity survived the filter
    Matched,
}

/// Entities of one kind after aggregation and optional filtering
///
/// `discovered` is the pre-filter count, so an empty `entities` list can be
/// reported distinctly from "nothing was extracted in the first place".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet<T> {
    pub entities: Vec<T>,
    pub discovered: usize,
}

impl<T> Default for EntitySet<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            discovered: 0,
        }
    }
}

impl<T> EntitySet<T> {
    pub fn outcome(&self) -> FilterOutcome {
        if self.discovered == 0 {
            FilterOutcome::NothingExtracted
        } else if self.entities.is_empty() {
            FilterOutcome::AllFilteredOut
        } else {
            FilterOutcome::Matched
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Search specification applied over extracted entities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Query {
    /// Free-text term; empty means "match everything"
    #[serde(default)]
    pub search_term: String,
    /// Treat `search_term` as a regular expression
    #[serde(default)]
    pub use_regex: bool,
    #[serde(default)]
    pub case_sensitive: bool,
    /// Wrap matches in the emphasis marker in the returned copies
    #[serde(default)]
    pub highlight_matches: bool,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
    }
}

/// Complete result of one analysis run
///
/// Rebuilt from scratch on every invocation; the query layer may hold a
/// reference to the last result as its session context, but no state
/// survives inside the core between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub root: String,
    /// File-extension histogram over the walked tree
    pub file_types: BTreeMap<String, usize>,
    /// Indented directory-tree snapshot
    pub tree: String,
    pub csharp_classes: EntitySet<ClassEntity>,
    pub js_functions: EntitySet<FunctionEntity>,
    pub js_classes: EntitySet<ClassEntity>,
    pub react_components: EntitySet<ComponentEntity>,
    pub vue_components: EntitySet<ComponentEntity>,
    /// Files that failed to read; rendered sorted
    pub failed_files: BTreeSet<String>,
}

impl AnalysisResult {
    /// Total entity count across all dialect sets (post-filter)
    pub fn total_entities(&self) -> usize {
        self.csharp_classes.len()
            + self.js_functions.len()
            + self.js_classes.len()
            + self.react_components.len()
            + self.vue_components.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_outcome_distinguishes_empty_cases() {
        let never: EntitySet<FunctionEntity> = EntitySet::default();
        assert_eq!(never.outcome(), FilterOutcome::NothingExtracted);

        let filtered = EntitySet::<FunctionEntity> {
            entities: Vec::new(),
            discovered: 3,
        };
        assert_eq!(filtered.outcome(), FilterOutcome::AllFilteredOut);
    }

    #[test]
    fn test_component_serialization_skips_empty_sections() {
        let component = ComponentEntity {
            name: "Widget".to_string(),
            file: "Widget.tsx".to_string(),
            props: vec!["label".to_string()],
            hooks: vec!["useEffect".to_string()],
            data: Vec::new(),
            methods: Vec::new(),
            computed: Vec::new(),
            setup_syntax: false,
        };
        let json = serde_json::to_string(&component).unwrap();
        assert!(json.contains("\"props\""));
        assert!(!json.contains("\"computed\""));
    }

    #[test]
    fn test_empty_query_matches_everything_marker() {
        let query = Query::default();
        assert!(query.is_empty());
    }
}
