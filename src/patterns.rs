//! Per-dialect regex pattern tables
//!
//! Pattern tables are immutable configuration data: each dialect gets an
//! ordered list of candidate-entity patterns with the capture-group roles
//! the extractor reads, so new dialects can be added without touching the
//! extraction control flow. Nested-attribute patterns (hooks, props, SFC
//! sections) are named statics alongside the candidate tables.

use once_cell::sync::Lazy;
use regex::Regex;

/// Entity shapes a candidate pattern can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `function name(params)` declaration, named or anonymous
    FunctionDecl,
    /// `const name = (params) =>` variable-bound arrow
    ArrowBinding,
    /// `name(params) {` object/class method shorthand
    MethodShorthand,
    /// `name: function(params)` explicit function-value assignment
    FunctionValue,
    /// `class Name extends Base`
    ClassDecl,
    /// `function Name(props)` with uppercase initial
    ComponentFunction,
    /// `const Name = (props) =>` with uppercase initial
    ComponentArrow,
    /// `class Name extends Component`
    ComponentClass,
}

/// One candidate-entity pattern and the capture groups it uses
pub struct EntityPattern {
    pub kind: PatternKind,
    pub regex: Regex,
    /// Group holding the entity name
    pub name_group: usize,
    /// Group holding raw parameter text, when the shape has one
    pub params_group: Option<usize>,
    /// Group holding the inheritance-clause text, for class shapes
    pub bases_group: Option<usize>,
}

fn pattern(
    kind: PatternKind,
    regex: &str,
    name_group: usize,
    params_group: Option<usize>,
    bases_group: Option<usize>,
) -> EntityPattern {
    EntityPattern {
        kind,
        // Table literals are vetted at development time
        regex: Regex::new(regex).unwrap(),
        name_group,
        params_group,
        bases_group,
    }
}

// ── JavaScript/TypeScript functions ─────────────────────────────────────

pub static JS_FUNCTION_PATTERNS: Lazy<Vec<EntityPattern>> = Lazy::new(|| {
    vec![
        pattern(
            PatternKind::FunctionDecl,
            r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][\w$]*)?\s*\(([^)]*)\)",
            1,
            Some(2),
            None,
        ),
        pattern(
            PatternKind::ArrowBinding,
            r"(?m)^[ \t]*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?\(([^)]*)\)\s*=>",
            1,
            Some(2),
            None,
        ),
        pattern(
            PatternKind::ArrowBinding,
            r"(?m)^[ \t]*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?([A-Za-z_$][\w$]*)\s*=>",
            1,
            Some(2),
            None,
        ),
        pattern(
            PatternKind::MethodShorthand,
            r"(?m)^[ \t]*(?:static\s+|async\s+|get\s+|set\s+)*([A-Za-z_$][\w$]*)\s*\(([^)]*)\)\s*\{",
            1,
            Some(2),
            None,
        ),
        pattern(
            PatternKind::FunctionValue,
            r"([A-Za-z_$][\w$]*)\s*[:=]\s*(?:async\s+)?function\s*\*?\s*\(([^)]*)\)",
            1,
            Some(2),
            None,
        ),
    ]
});

// ── JavaScript/TypeScript classes ───────────────────────────────────────

pub static JS_CLASS_PATTERNS: Lazy<Vec<EntityPattern>> = Lazy::new(|| {
    vec![pattern(
        PatternKind::ClassDecl,
        r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][\w$]*)(?:\s+extends\s+([\w.$]+))?",
        1,
        None,
        Some(2),
    )]
});

/// Method shorthand inside a class body, with modifier capture.
/// Groups: 1 modifiers, 2 name, 3 params.
pub static JS_METHOD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*((?:public\s+|private\s+|protected\s+|readonly\s+|static\s+|async\s+|get\s+|set\s+)*)([A-Za-z_$#][\w$]*)\s*\(([^)]*)\)\s*\{",
    )
    .unwrap()
});

// ── React components ────────────────────────────────────────────────────

pub static REACT_COMPONENT_PATTERNS: Lazy<Vec<EntityPattern>> = Lazy::new(|| {
    vec![
        pattern(
            PatternKind::ComponentFunction,
            r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s+([A-Z][\w$]*)\s*\(([^)]*)\)",
            1,
            Some(2),
            None,
        ),
        pattern(
            PatternKind::ComponentArrow,
            r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:const|let)\s+([A-Z][\w$]*)[^=\n]*=\s*(?:React\.)?(?:memo|forwardRef)\s*\(\s*(?:async\s+)?\(([^)]*)\)\s*=>",
            1,
            Some(2),
            None,
        ),
        pattern(
            PatternKind::ComponentArrow,
            r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:const|let)\s+([A-Z][\w$]*)[^=\n]*=\s*(?:async\s+)?\(([^)]*)\)\s*=>",
            1,
            Some(2),
            None,
        ),
        pattern(
            PatternKind::ComponentClass,
            r"(?m)\bclass\s+([A-Z][\w$]*)\s+extends\s+(?:[A-Za-z_$][\w$]*\.)?(?:Pure)?Component\b",
            1,
            None,
            None,
        ),
    ]
});

/// Built-in hook names plus the `use<Uppercase>` wildcard for custom hooks
pub static HOOK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(useState|useEffect|useContext|useReducer|useCallback|useMemo|useRef|useImperativeHandle|useLayoutEffect|useDebugValue|useTransition|useDeferredValue|useId|useSyncExternalStore|use[A-Z][\w$]*)\s*\(",
    )
    .unwrap()
});

/// Braced destructuring group inside a raw signature
pub static DESTRUCTURE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]*)\}").unwrap());

/// Dotted prop access in a component body
pub static PROPS_ACCESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bprops\.([A-Za-z_$][\w$]*)").unwrap());

/// Single type-annotated parameter: `(name: TypeIdentifier)`
pub static TYPED_PROPS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z_$][\w$]*)\s*:\s*([A-Za-z_$][\w$.]*)\s*$").unwrap());

// ── C# classes ──────────────────────────────────────────────────────────

pub static CSHARP_CLASS_PATTERNS: Lazy<Vec<EntityPattern>> = Lazy::new(|| {
    vec![pattern(
        PatternKind::ClassDecl,
        r"(?m)^[ \t]*(?:public\s+|internal\s+|private\s+|protected\s+)?(?:static\s+|abstract\s+|sealed\s+|partial\s+)*class\s+([A-Za-z_]\w*)(?:<[^>\n]*>)?(?:\s*:\s*([^\r\n{]+))?",
        1,
        None,
        Some(2),
    )]
});

/// C# method signature inside a class body.
/// Groups: 1 visibility, 2 modifiers, 3 return type, 4 name, 5 params.
pub static CSHARP_METHOD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*((?:public|private|protected|internal)(?:\s+internal|\s+protected)?)?\s*((?:static\s+|virtual\s+|override\s+|sealed\s+|async\s+|new\s+|partial\s+)*)([A-Za-z_][\w<>\[\],\.\? ]*?)\s+([A-Za-z_]\w*)\s*\(([^)]*)\)\s*(?:\{|=>)",
    )
    .unwrap()
});

// ── Vue single-file components ──────────────────────────────────────────

/// `<script>` block of an SFC, content in group 1
pub static VUE_SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script[^>]*>(.*?)</script>").unwrap());

/// Setup-style single-block declaration marker
pub static VUE_SETUP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<script[^>]*\bsetup\b[^>]*>").unwrap());

/// Options-object component entry point; the body brace follows the match
pub static VUE_OPTIONS_EXPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"export\s+default\s*(?:defineComponent\s*\(\s*)?").unwrap());

/// Named section openers; the section brace is located by the scanner
pub static VUE_DATA_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bdata\s*(?:\(\s*\)\s*\{|:\s*function\s*\(\s*\)\s*\{|:\s*\{)").unwrap()
});
pub static VUE_METHODS_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bmethods\s*:\s*\{").unwrap());
pub static VUE_COMPUTED_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bcomputed\s*:\s*\{").unwrap());

/// Returned object of a `data()` function form
pub static VUE_RETURN_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\breturn\s*\{").unwrap());

/// Line-anchored member name before `:` or `(` inside a section block
pub static VUE_MEMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(?:async\s+)?([A-Za-z_$][\w$]*)\s*[:(]").unwrap());

/// `props: [...]` array form, content in group 1
pub static VUE_PROPS_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bprops\s*:\s*\[([^\]]*)\]").unwrap());

/// `props: {...}` object form; the brace is located by the scanner
pub static VUE_PROPS_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bprops\s*:\s*\{").unwrap());

/// `defineProps` in setup scripts; generic type members in group 1 when the
/// type-argument form is used
pub static VUE_DEFINE_PROPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bdefineProps\s*(?:<\s*\{([^}]*)\}\s*>)?\s*\(").unwrap());

/// Top-level bindings used in place of sections for setup-style scripts
pub static VUE_TOP_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:export\s+)?(?:async\s+)?function\s+([A-Za-z_$][\w$]*)").unwrap());
pub static VUE_TOP_CONST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:export\s+)?const\s+([A-Za-z_$][\w$]*)\s*=").unwrap());
