//! Deduplication and deterministic ordering of extracted entities
//!
//! Pattern passes run independently and may rediscover the same entity;
//! the aggregator drops later duplicates of `(name, file)` within a
//! variant and re-sorts so the final lists are byte-identical for a fixed
//! input regardless of discovery order across files.

use std::collections::HashSet;

use crate::schema::{ClassEntity, ComponentEntity, FunctionEntity};

/// Dedup/sort key shared by every entity variant
pub trait EntityKey {
    fn name(&self) -> &str;
    fn file(&self) -> &str;
}

impl EntityKey for FunctionEntity {
    fn name(&self) -> &str {
        &self.name
    }
    fn file(&self) -> &str {
        &self.file
    }
}

impl EntityKey for ClassEntity {
    fn name(&self) -> &str {
        &self.name
    }
    fn file(&self) -> &str {
        &self.file
    }
}

impl EntityKey for ComponentEntity {
    fn name(&self) -> &str {
        &self.name
    }
    fn file(&self) -> &str {
        &self.file
    }
}

/// Drop later duplicates of `(name, file)`, keeping the first discovery
pub fn dedup_first<T: EntityKey>(entities: Vec<T>) -> Vec<T> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    entities
        .into_iter()
        .filter(|e| seen.insert((e.name().to_string(), e.file().to_string())))
        .collect()
}

/// Deterministic ordering: by name, then by file
pub fn sort_entities<T: EntityKey>(entities: &mut [T]) {
    entities.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.file().cmp(b.file())));
}

/// Merge the concatenated per-file partial lists of one variant into the
/// final deduplicated, sorted list
pub fn merge<T: EntityKey>(entities: Vec<T>) -> Vec<T> {
    let mut merged = dedup_first(entities);
    sort_entities(&mut merged);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(name: &str, file: &str) -> FunctionEntity {
        FunctionEntity {
            name: name.to_string(),
            file: file.to_string(),
            parameters: Vec::new(),
        }
    }

    #[test]
    fn test_first_found_wins() {
        let first = FunctionEntity {
            parameters: vec!["a".to_string()],
            ..function("dup", "x.js")
        };
        let merged = merge(vec![first, function("dup", "x.js")]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].parameters, vec!["a"]);
    }

    #[test]
    fn test_same_name_different_files_both_kept() {
        let merged = merge(vec![function("run", "a.js"), function("run", "b.js")]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_sorted_by_name_then_file() {
        let merged = merge(vec![
            function("zeta", "a.js"),
            function("alpha", "b.js"),
            function("alpha", "a.js"),
        ]);
        let keys: Vec<_> = merged.iter().map(|f| (f.name.as_str(), f.file.as_str())).collect();
        assert_eq!(
            keys,
            vec![("alpha", "a.js"), ("alpha", "b.js"), ("zeta", "a.js")]
        );
    }

    #[test]
    fn test_no_duplicate_keys_after_merge() {
        let merged = merge(vec![
            function("a", "x.js"),
            function("a", "x.js"),
            function("b", "x.js"),
            function("a", "y.js"),
        ]);
        let mut keys: Vec<_> = merged.iter().map(|f| (f.name.clone(), f.file.clone())).collect();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }
}
