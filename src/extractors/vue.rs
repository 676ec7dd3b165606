//! Vue single-file component extraction
//!
//! Isolates the `<script>` section of an SFC, then recovers props and the
//! stateful sections (`data`, `methods`, `computed`) from the options
//! object via brace-balanced captures and a line-anchored member pattern.
//! A `<script setup>` block flips the alternate-syntax flag and substitutes
//! a lighter heuristic: top-level function bindings stand in for methods,
//! top-level const bindings for data.

use std::path::Path;

use tracing::debug;

use crate::extractors::{FileEntities, StructureExtractor};
use crate::lang::Dialect;
use crate::patterns::{
    VUE_COMPUTED_SECTION, VUE_DATA_SECTION, VUE_DEFINE_PROPS, VUE_MEMBER_PATTERN,
    VUE_METHODS_SECTION, VUE_OPTIONS_EXPORT, VUE_PROPS_ARRAY, VUE_PROPS_OBJECT, VUE_RETURN_OBJECT,
    VUE_SCRIPT_BLOCK, VUE_SETUP_MARKER, VUE_TOP_CONST, VUE_TOP_FUNCTION,
};
use crate::scanner;
use crate::schema::ComponentEntity;

pub struct VueExtractor;

impl StructureExtractor for VueExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::Vue
    }

    fn extract(&self, file: &str, source: &str) -> FileEntities {
        let mut out = FileEntities::default();
        let name = component_name(file);

        let script = match VUE_SCRIPT_BLOCK.captures(source).and_then(|c| c.get(1)) {
            Some(m) => m.as_str(),
            // Template-only SFC: record the component with empty attributes
            // rather than dropping it.
            None => {
                out.components.push(empty_component(name, file));
                return out;
            }
        };

        let component = if VUE_SETUP_MARKER.is_match(source) {
            extract_setup_component(name, file, script)
        } else {
            extract_options_component(name, file, script)
        };

        debug!(file, setup = component.setup_syntax, "vue extraction done");
        out.components.push(component);
        out
    }
}

/// SFC component name comes from the file stem
fn component_name(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Component")
        .to_string()
}

fn empty_component(name: String, file: &str) -> ComponentEntity {
    ComponentEntity {
        name,
        file: file.to_string(),
        props: Vec::new(),
        hooks: Vec::new(),
        data: Vec::new(),
        methods: Vec::new(),
        computed: Vec::new(),
        setup_syntax: false,
    }
}

/// Options-object component: locate the default export, then enumerate the
/// named section blocks inside its brace-balanced body.
fn extract_options_component(name: String, file: &str, script: &str) -> ComponentEntity {
    let mut component = empty_component(name, file);

    let options = VUE_OPTIONS_EXPORT
        .find(script)
        .and_then(|m| scanner::body_of(script, m.end()));
    let options = match options {
        Some(body) => body,
        None => return component,
    };

    component.props = options_props(options);
    component.data = data_members(options);
    component.methods = section_members(options, &VUE_METHODS_SECTION);
    component.computed = section_members(options, &VUE_COMPUTED_SECTION);
    component
}

/// Setup-style component: no options object to walk, so top-level bindings
/// substitute for the missing sections.
fn extract_setup_component(name: String, file: &str, script: &str) -> ComponentEntity {
    let mut component = empty_component(name, file);
    component.setup_syntax = true;

    component.props = define_props(script);
    for caps in VUE_TOP_FUNCTION.captures_iter(script) {
        component.methods.push(caps[1].to_string());
    }
    for caps in VUE_TOP_CONST.captures_iter(script) {
        component.data.push(caps[1].to_string());
    }
    component
}

/// Props of an options component: array form first, object form second
fn options_props(options: &str) -> Vec<String> {
    if let Some(caps) = VUE_PROPS_ARRAY.captures(options) {
        return caps[1]
            .split(',')
            .filter_map(|t| {
                let t = t.trim().trim_matches(|c| c == '\'' || c == '"' || c == '`');
                if t.is_empty() {
                    None
                } else {
                    Some(t.to_string())
                }
            })
            .collect();
    }

    VUE_PROPS_OBJECT
        .find(options)
        .and_then(|m| scanner::body_of(options, m.end() - 1))
        .map(member_names)
        .unwrap_or_default()
}

/// Props of a setup component: `defineProps` type-argument members or the
/// object-argument keys
fn define_props(script: &str) -> Vec<String> {
    let caps = match VUE_DEFINE_PROPS.captures(script) {
        Some(c) => c,
        None => return Vec::new(),
    };

    // Type-argument form: defineProps<{ a: string; b?: number }>()
    if let Some(members) = caps.get(1) {
        return members
            .as_str()
            .split([';', ','])
            .filter_map(|t| {
                let t = t.split(':').next().unwrap_or("").trim().trim_end_matches('?');
                if t.is_empty() {
                    None
                } else {
                    Some(t.to_string())
                }
            })
            .collect();
    }

    // Object-argument form: defineProps({ a: String }). The scanner first
    // balances the argument parens, then the object inside them.
    let call_open = caps.get(0).map(|m| m.end() - 1).unwrap_or(0);
    scanner::body_of(script, call_open)
        .and_then(|args| scanner::body_of(args, 0))
        .map(member_names)
        .unwrap_or_default()
}

/// `data` members: handle both the function form (members live in the
/// returned object) and the plain object form
fn data_members(options: &str) -> Vec<String> {
    let m = match VUE_DATA_SECTION.find(options) {
        Some(m) => m,
        None => return Vec::new(),
    };
    let block = match scanner::body_of(options, m.end() - 1) {
        Some(b) => b,
        None => return Vec::new(),
    };

    if m.as_str().contains('(') {
        // Function form: enumerate the returned object instead.
        VUE_RETURN_OBJECT
            .find(block)
            .and_then(|r| scanner::body_of(block, r.end() - 1))
            .map(member_names)
            .unwrap_or_default()
    } else {
        member_names(block)
    }
}

/// Members of a named section block (`methods`, `computed`)
fn section_members(options: &str, section: &regex::Regex) -> Vec<String> {
    section
        .find(options)
        .and_then(|m| scanner::body_of(options, m.end() - 1))
        .map(member_names)
        .unwrap_or_default()
}

/// Line-anchored identifier-before-colon-or-paren enumeration
fn member_names(block: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in VUE_MEMBER_PATTERN.captures_iter(block) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
