//! Helpers shared by the dialect extractors

/// Control-flow and declaration keywords that the method-shorthand pattern
/// would otherwise pick up as entity names
pub const NON_ENTITY_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "else", "do", "try", "function", "new",
    "typeof", "await", "in", "of",
];

/// Split raw parameter text on commas, trim, and discard empty tokens.
///
/// The split is deliberately naive: nested parens/braces in default values
/// are not balanced at this stage.
pub fn split_params(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

/// Reduce a destructuring token to the prop name: strip the default-value
/// suffix (`= expr`), the rename suffix (`: alias`), and a rest prefix.
pub fn destructured_prop_name(token: &str) -> Option<String> {
    let token = token.split('=').next().unwrap_or("");
    let token = token.split(':').next().unwrap_or("");
    let token = token.trim().trim_start_matches("...").trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Components are disambiguated from plain functions by an uppercase
/// initial on the captured name.
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().map(|c| c.is_ascii_uppercase()).unwrap_or(false)
}

/// Check whether a captured name is a control-flow keyword rather than an
/// entity name
pub fn is_keyword(name: &str) -> bool {
    NON_ENTITY_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_params_trims_and_drops_empty() {
        assert_eq!(split_params("a, b , c"), vec!["a", "b", "c"]);
        assert_eq!(split_params(""), Vec::<String>::new());
        assert_eq!(split_params(" , "), Vec::<String>::new());
    }

    #[test]
    fn test_split_params_is_naive_about_nesting() {
        // Nested commas in defaults are split too; accepted heuristic.
        assert_eq!(
            split_params("a = [1, 2], b"),
            vec!["a = [1", "2]", "b"]
        );
    }

    #[test]
    fn test_destructured_prop_name() {
        assert_eq!(destructured_prop_name("label"), Some("label".to_string()));
        assert_eq!(
            destructured_prop_name("size = 'md'"),
            Some("size".to_string())
        );
        assert_eq!(
            destructured_prop_name("onClick: handle"),
            Some("onClick".to_string())
        );
        assert_eq!(destructured_prop_name("...rest"), Some("rest".to_string()));
        assert_eq!(destructured_prop_name("  "), None);
    }

    #[test]
    fn test_component_name_check() {
        assert!(is_component_name("Widget"));
        assert!(!is_component_name("widget"));
        assert!(!is_component_name("_Widget"));
        assert!(!is_component_name(""));
    }
}
