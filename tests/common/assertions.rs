//! Assertion helpers for entity sets

use std::collections::HashSet;

use codesift::aggregate::EntityKey;
use codesift::{ComponentEntity, EntitySet, FunctionEntity};

/// Assert the exact (sorted) names of an entity set
pub fn assert_names<T: EntityKey>(set: &EntitySet<T>, expected: &[&str]) {
    let names: Vec<&str> = set.entities.iter().map(|e| e.name()).collect();
    assert_eq!(names, expected, "entity names mismatch");
}

/// Assert that no two entities in the set share `(name, file)`
pub fn assert_unique_keys<T: EntityKey>(set: &EntitySet<T>) {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for entity in &set.entities {
        assert!(
            seen.insert((entity.name().to_string(), entity.file().to_string())),
            "duplicate entity key ({}, {})",
            entity.name(),
            entity.file()
        );
    }
}

/// Find a function entity by name
pub fn function_named<'a>(set: &'a EntitySet<FunctionEntity>, name: &str) -> &'a FunctionEntity {
    set.entities
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no function named {name}"))
}

/// Find a component entity by name
pub fn component_named<'a>(set: &'a EntitySet<ComponentEntity>, name: &str) -> &'a ComponentEntity {
    set.entities
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no component named {name}"))
}
