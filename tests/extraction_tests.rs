//! End-to-end extraction tests over mixed source trees

mod common;

use common::{assert_names, assert_unique_keys, component_named, function_named, TestRepo};
use codesift::FilterOutcome;

#[test]
fn extracts_plain_function_with_parameters() {
    let repo = TestRepo::new().with_file("greet.js", "function Greet(name) { return name; }");
    let result = repo.analyze();

    assert_eq!(result.js_functions.len(), 1);
    let greet = function_named(&result.js_functions, "Greet");
    assert_eq!(greet.parameters, vec!["name"]);
    assert!(result.failed_files.is_empty());
}

#[test]
fn extracts_component_with_props_and_hooks() {
    let repo = TestRepo::new().with_file(
        "Widget.jsx",
        "const Widget = ({ label, onClick }) => { useEffect(() => {}, []); return null; }",
    );
    let result = repo.analyze();

    let widget = component_named(&result.react_components, "Widget");
    assert_eq!(widget.props, vec!["label", "onClick"]);
    assert_eq!(widget.hooks, vec!["useEffect"]);
}

#[test]
fn extracts_csharp_class_with_methods() {
    let repo = TestRepo::new().with_file(
        "Services/Greeter.cs",
        r#"
namespace Demo
{
    public class Greeter : IGreeter
    {
        public string Greet(string name)
        {
            return name;
        }
    }
}
"#,
    );
    let result = repo.analyze();

    assert_eq!(result.csharp_classes.len(), 1);
    let greeter = &result.csharp_classes.entities[0];
    assert_eq!(greeter.name, "Greeter");
    assert_eq!(greeter.bases, vec!["IGreeter"]);
    assert_eq!(greeter.methods.len(), 1);
    assert_eq!(greeter.methods[0].name, "Greet");
    assert_eq!(greeter.methods[0].return_type, "string");
    assert!(greeter.methods[0].is_public);
}

#[test]
fn extracts_vue_options_component() {
    let repo = TestRepo::new().with_file(
        "components/Counter.vue",
        r#"
<template><button @click="increment">{{ count }}</button></template>
<script>
export default {
  props: ['start'],
  data() {
    return { count: 0 };
  },
  methods: {
    increment() { this.count += 1; }
  },
  computed: {
    doubled() { return this.count * 2; }
  }
};
</script>
"#,
    );
    let result = repo.analyze();

    let counter = component_named(&result.vue_components, "Counter");
    assert!(!counter.setup_syntax);
    assert_eq!(counter.props, vec!["start"]);
    assert_eq!(counter.data, vec!["count"]);
    assert_eq!(counter.methods, vec!["increment"]);
    assert_eq!(counter.computed, vec!["doubled"]);
}

#[test]
fn extracts_vue_setup_component() {
    let repo = TestRepo::new().with_file(
        "components/Search.vue",
        "<script setup>\nconst term = ref('');\nfunction submit() {}\n</script>\n",
    );
    let result = repo.analyze();

    let search = component_named(&result.vue_components, "Search");
    assert!(search.setup_syntax);
    assert_eq!(search.data, vec!["term"]);
    assert_eq!(search.methods, vec!["submit"]);
}

#[test]
fn mixed_tree_fills_every_dialect_set() {
    let repo = TestRepo::new()
        .with_file("api/Service.cs", "public class Service { public void Run() { } }")
        .with_file("web/util.js", "const parse = (raw) => JSON.parse(raw);")
        .with_file("web/App.tsx", "export function App() { return null; }")
        .with_file("web/Home.vue", "<template><div/></template>");
    let result = repo.analyze();

    assert_eq!(result.csharp_classes.len(), 1);
    assert!(result.js_functions.len() >= 2); // parse + App
    assert_eq!(result.react_components.len(), 1);
    assert_eq!(result.vue_components.len(), 1);
    assert!(result.failed_files.is_empty());
}

#[test]
fn file_without_entities_is_not_a_failure() {
    let repo = TestRepo::new().with_file("empty.js", "// nothing here\n");
    let result = repo.analyze();

    assert_eq!(result.total_entities(), 0);
    assert_eq!(result.js_functions.outcome(), FilterOutcome::NothingExtracted);
    assert!(result.failed_files.is_empty());
}

#[test]
fn duplicate_discoveries_are_dropped_not_merged() {
    // The arrow pattern and the method-shorthand pattern can both hit the
    // same binding; only the first-found survives.
    let repo = TestRepo::new().with_file(
        "dup.js",
        "function fetchData(url) {\n  return url;\n}\nconst api = {\n  fetchData(x) { return x; },\n};\n",
    );
    let result = repo.analyze();

    assert_unique_keys(&result.js_functions);
    let fetch = function_named(&result.js_functions, "fetchData");
    assert_eq!(fetch.parameters, vec!["url"]);
}

#[test]
fn entity_lists_are_sorted_by_name() {
    let repo = TestRepo::new()
        .with_file("one.js", "function zeta() {}\nfunction alpha() {}\n")
        .with_file("two.js", "function mid(a) {}\n");
    let result = repo.analyze();

    assert_names(&result.js_functions, &["alpha", "mid", "zeta"]);
}

#[test]
fn uppercase_function_appears_in_both_function_and_component_sets() {
    let repo = TestRepo::new().with_file("Greet.jsx", "function Greet(name) { return name; }");
    let result = repo.analyze();

    // Dialect sets are independent: the same shape is a plain function to
    // the JS dialect and a component candidate to the React dialect.
    assert_eq!(result.js_functions.len(), 1);
    assert_eq!(result.react_components.len(), 1);
    assert_unique_keys(&result.react_components);
}

#[test]
fn histogram_and_tree_are_populated() {
    let repo = TestRepo::new()
        .with_file("src/a.ts", "export const a = 1;")
        .with_file("src/b.ts", "export const b = 2;")
        .with_file("README.md", "# readme");
    let result = repo.analyze();

    assert_eq!(result.file_types.get("ts"), Some(&2));
    assert_eq!(result.file_types.get("md"), Some(&1));
    assert!(result.tree.contains("src/"));
    assert!(result.tree.contains("a.ts"));
}
