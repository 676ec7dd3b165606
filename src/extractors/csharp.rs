//! C# class extraction
//!
//! Recovers class declarations with their inheritance clause and method
//! members (visibility, static flag, return-type text, parameter text)
//! from the scanner-bounded class body. Purely heuristic: attributes,
//! generics, and expression-bodied members are tolerated, not parsed.

use tracing::debug;

use crate::extractors::common::{is_keyword, split_params};
use crate::extractors::javascript::skip_whitespace;
use crate::extractors::{FileEntities, StructureExtractor};
use crate::lang::Dialect;
use crate::patterns::{CSHARP_CLASS_PATTERNS, CSHARP_METHOD_PATTERN};
use crate::scanner;
use crate::schema::{ClassEntity, MethodEntity};

/// Tokens the method pattern can misread as a return type
const NON_RETURN_TOKENS: &[&str] = &["return", "new", "else", "await", "using", "lock", "yield", "throw"];

pub struct CSharpExtractor;

impl StructureExtractor for CSharpExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::CSharp
    }

    fn extract(&self, file: &str, source: &str) -> FileEntities {
        let mut out = FileEntities::default();

        for pat in CSHARP_CLASS_PATTERNS.iter() {
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

                // The body brace usually sits on its own line (Allman
                // style), so step over the whitespace before scanning.
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

        debug!(file, classes = out.classes.len(), "csharp extraction done");
        out
    }
}

fn extract_methods(body: &str) -> Vec<MethodEntity> {
    CSHARP_METHOD_PATTERN
        .captures_iter(body)
        .filter_map(|caps| {
            let return_type = caps[3].trim().to_string();
            let name = caps[4].to_string();
            if is_keyword(&name) || NON_RETURN_TOKENS.contains(&return_type.as_str()) {
                return None;
            }
            let visibility = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let modifiers = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            Some(MethodEntity {
                name,
                return_type,
                is_public: visibility.starts_with("public"),
                is_static: modifiers.contains("static"),
                parameters: split_params(&caps[5]),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> FileEntities {
        CSharpExtractor.extract("Services/Greeter.cs", source)
    }

    #[test]
    fn test_class_with_methods() {
        let source = r#"
namespace Demo.Services
{
    public class Greeter : BaseService, IGreeter
    {
        public string Greet(string name)
        {
            return $"Hello {name}";
        }

        private static int Count(List<string> items) => items.Count;
    }
}
"#;
        let out = extract(source);
        assert_eq!(out.classes.len(), 1);
        let greeter = &out.classes[0];
        assert_eq!(greeter.name, "Greeter");
        assert_eq!(greeter.bases, vec!["BaseService", "IGreeter"]);

        assert_eq!(greeter.methods.len(), 2);
        let greet = &greeter.methods[0];
        assert_eq!(greet.name, "Greet");
        assert_eq!(greet.return_type, "string");
        assert!(greet.is_public);
        assert!(!greet.is_static);
        assert_eq!(greet.parameters, vec!["string name"]);

        let count = &greeter.methods[1];
        assert_eq!(count.name, "Count");
        assert!(!count.is_public);
        assert!(count.is_static);
    }

    #[test]
    fn test_class_without_inheritance() {
        let out = extract("public class Plain\n{\n}\n");
        assert_eq!(out.classes.len(), 1);
        assert!(out.classes[0].bases.is_empty());
        assert!(out.classes[0].methods.is_empty());
    }

    #[test]
    fn test_control_flow_not_mistaken_for_methods() {
        let source = r#"
public class Loop
{
    public void Run(int n)
    {
        if (n > 0)
        {
            for (var i = 0; i < n; i++) { Step(i); }
        }
    }
}
"#;
        let out = extract(source);
        let methods: Vec<_> = out.classes[0].methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["Run"]);
    }

    #[test]
    fn test_generic_return_type() {
        let source = "class Repo\n{\n    public Task<List<User>> FindAll(string filter) {\n        return null;\n    }\n}\n";
        let out = extract(source);
        let find_all = &out.classes[0].methods[0];
        assert_eq!(find_all.name, "FindAll");
        assert_eq!(find_all.return_type, "Task<List<User>>");
    }
}
