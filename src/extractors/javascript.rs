//! JavaScript/TypeScript function and class extraction
//!
//! Runs the function pattern table (declarations, arrow bindings, method
//! shorthand, explicit function values) and the class pattern over raw
//! file text. Class method members are recovered from the scanner-bounded
//! class body with the shorthand pattern.

use tracing::debug;

use crate::extractors::common::{is_keyword, split_params};
use crate::extractors::{FileEntities, StructureExtractor};
use crate::lang::Dialect;
use crate::patterns::{JS_CLASS_PATTERNS, JS_FUNCTION_PATTERNS, JS_METHOD_PATTERN};
use crate::scanner;
use crate::schema::{ClassEntity, FunctionEntity, MethodEntity};

/// Name assigned to anonymous function declarations
const ANONYMOUS: &str = "anonymous";

pub struct JavaScriptExtractor;

impl StructureExtractor for JavaScriptExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::JavaScript
    }

    fn extract(&self, file: &str, source: &str) -> FileEntities {
        let mut out = FileEntities::default();

        for pat in JS_FUNCTION_PATTERNS.iter() {
            for caps in pat.regex.captures_iter(source) {
                let name = caps
                    .get(pat.name_group)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| ANONYMOUS.to_string());
                if is_keyword(&name) {
                    continue;
                }
                let parameters = pat
                    .params_group
                    .and_then(|g| caps.get(g))
                    .map(|m| split_params(m.as_str()))
                    .unwrap_or_default();
                out.functions.push(FunctionEntity {
                    name,
                    file: file.to_string(),
                    parameters,
                });
            }
        }

        for pat in JS_CLASS_PATTERNS.iter() {
            for caps in pat.regex.captures_iter(source) {
                let name = match caps.get(pat.name_group) {
                    Some(m) => m.as_str().to_string(),
                    None => continue,
                };
                let bases = pat
                    .bases_group
                    .and_then(|g| caps.get(g))
                    .map(|m| split_params(m.as_str()))
                    .unwrap_or_default();

                let after = skip_whitespace(source, caps.get(0).map(|m| m.end()).unwrap_or(0));
                let methods = scanner::body_of(source, after)
                    .map(extract_methods)
                    .unwrap_or_default();

                out.classes.push(ClassEntity {
                    name,
                    file: file.to_string(),
                    bases,
                    methods,
                });
            }
        }

        debug!(
            file,
            functions = out.functions.len(),
            classes = out.classes.len(),
            "javascript extraction done"
        );
        out
    }
}

/// Advance past whitespace so a brace on the following line is still found
/// by the scanner (which otherwise treats a newline as the no-block
/// sentinel).
pub(crate) fn skip_whitespace(source: &str, from: usize) -> usize {
    let rest = &source[from.min(source.len())..];
    from + (rest.len() - rest.trim_start().len())
}

/// Enumerate method members of a class body via the shorthand pattern
fn extract_methods(body: &str) -> Vec<MethodEntity> {
    JS_METHOD_PATTERN
        .captures_iter(body)
        .filter_map(|caps| {
            let name = caps[2].to_string();
            if is_keyword(&name) {
                return None;
            }
            let modifiers = &caps[1];
            Some(MethodEntity {
                is_public: !modifiers.contains("private") && !name.starts_with('#'),
                is_static: modifiers.contains("static"),
                name,
                return_type: String::new(),
                parameters: split_params(&caps[3]),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> FileEntities {
        JavaScriptExtractor.extract("app.js", source)
    }

    #[test]
    fn test_function_declaration() {
        let out = extract("function Greet(name) { return name; }");
        assert_eq!(out.functions.len(), 1);
        assert_eq!(out.functions[0].name, "Greet");
        assert_eq!(out.functions[0].parameters, vec!["name"]);
    }

    #[test]
    fn test_arrow_bindings() {
        let out = extract("const add = (a, b) => a + b;\nlet double = x => x * 2;\n");
        let names: Vec<_> = out.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["add", "double"]);
        assert_eq!(out.functions[1].parameters, vec!["x"]);
    }

    #[test]
    fn test_method_shorthand_and_function_value() {
        let source = r#"
const api = {
  fetchUser(id) { return id; },
  save: function (user) { return user; },
};
"#;
        let out = extract(source);
        let names: Vec<_> = out.functions.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"fetchUser"));
        assert!(names.contains(&"save"));
    }

    #[test]
    fn test_control_flow_keywords_are_not_functions() {
        let source = "function run(x) {\n  if (x) { go(); }\n  for (const y of x) { use(y); }\n}\n";
        let out = extract(source);
        let names: Vec<_> = out.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["run"]);
    }

    #[test]
    fn test_anonymous_function_declaration() {
        let out = extract("function (a, b) { return a + b; }");
        assert_eq!(out.functions.len(), 1);
        assert_eq!(out.functions[0].name, "anonymous");
    }

    #[test]
    fn test_class_with_methods() {
        let source = r#"
export class UserStore extends BaseStore {
  constructor(db) { this.db = db; }
  static create() { return new UserStore(null); }
  find(id) { return this.db.get(id); }
}
"#;
        let out = extract(source);
        assert_eq!(out.classes.len(), 1);
        let class = &out.classes[0];
        assert_eq!(class.name, "UserStore");
        assert_eq!(class.bases, vec!["BaseStore"]);
        let methods: Vec<_> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["constructor", "create", "find"]);
        assert!(class.methods[1].is_static);
        assert!(class.methods[2].is_public);
    }

    #[test]
    fn test_class_body_on_next_line() {
        let source = "class Later\n{\n  run() { }\n}\n";
        let out = extract(source);
        assert_eq!(out.classes[0].methods.len(), 1);
    }

    #[test]
    fn test_no_entities_in_plain_text() {
        let out = extract("just some words\nwith no code\n");
        assert!(out.is_empty());
    }
}
