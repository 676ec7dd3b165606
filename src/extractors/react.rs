//! React component extraction and attribute resolution
//!
//! Components are recognized by shape (function, arrow binding, class
//! extending a known base) plus the uppercase-initial rule. For each
//! candidate, the resolver recovers hooks and props from the
//! scanner-bounded body: hooks via the built-in-plus-wildcard pattern,
//! props via three unioned strategies (destructuring, dotted `props.`
//! access, single typed parameter).

use std::collections::BTreeSet;

use tracing::debug;

use crate::extractors::common::{destructured_prop_name, is_component_name};
use crate::extractors::{FileEntities, StructureExtractor};
use crate::lang::Dialect;
use crate::patterns::{
    DESTRUCTURE_PATTERN, HOOK_PATTERN, PROPS_ACCESS_PATTERN, REACT_COMPONENT_PATTERNS,
    TYPED_PROPS_PATTERN,
};
use crate::scanner;
use crate::schema::ComponentEntity;

pub struct ReactExtractor;

impl StructureExtractor for ReactExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::React
    }

    fn extract(&self, file: &str, source: &str) -> FileEntities {
        let mut out = FileEntities::default();

        for pat in REACT_COMPONENT_PATTERNS.iter() {
            for caps in pat.regex.captures_iter(source) {
                let name = match caps.get(pat.name_group) {
                    Some(m) => m.as_str().to_string(),
                    None => continue,
                };
                if !is_component_name(&name) {
                    continue;
                }

                let signature = pat
                    .params_group
                    .and_then(|g| caps.get(g))
                    .map(|m| m.as_str())
                    .unwrap_or("");
                let body = scanner::body_of(source, caps.get(0).map(|m| m.end()).unwrap_or(0));

                // A candidate without a recognizable body is still recorded
                // with empty attributes.
                let props = resolve_props(signature, body);
                let hooks = resolve_hooks(body);

                out.components.push(ComponentEntity {
                    name,
                    file: file.to_string(),
                    props,
                    hooks,
                    data: Vec::new(),
                    methods: Vec::new(),
                    computed: Vec::new(),
                    setup_syntax: false,
                });
            }
        }

        debug!(file, components = out.components.len(), "react extraction done");
        out
    }
}

/// Union of the three prop-recovery strategies, first-seen order preserved
fn resolve_props(signature: &str, body: Option<&str>) -> Vec<String> {
    let mut props: Vec<String> = Vec::new();

    // (a) destructuring-parameter syntax
    if let Some(caps) = DESTRUCTURE_PATTERN.captures(signature) {
        for token in caps[1].split(',') {
            if let Some(name) = destructured_prop_name(token) {
                if !props.contains(&name) {
                    props.push(name);
                }
            }
        }
    }

    // (b) dotted access, only when the sole parameter is literally `props`
    if signature.trim() == "props" {
        if let Some(body) = body {
            for caps in PROPS_ACCESS_PATTERN.captures_iter(body) {
                let name = caps[1].to_string();
                if !props.contains(&name) {
                    props.push(name);
                }
            }
        }
    }

    // (c) a single type-annotated parameter records the type name as a
    // synthetic entry marking "typed props detected"
    if let Some(caps) = TYPED_PROPS_PATTERN.captures(signature) {
        let type_name = caps[2].to_string();
        if !props.contains(&type_name) {
            props.push(type_name);
        }
    }

    props
}

/// Hook names in the body, collected into a set and sorted alphabetically
fn resolve_hooks(body: Option<&str>) -> Vec<String> {
    let mut hooks: BTreeSet<String> = BTreeSet::new();
    if let Some(body) = body {
        for caps in HOOK_PATTERN.captures_iter(body) {
            hooks.insert(caps[1].to_string());
        }
    }
    hooks.into_iter().collect()
}
