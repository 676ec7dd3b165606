//! codesift CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use codesift::utils::truncate_with_ellipsis;
use codesift::{
    analyze, AnalysisResult, Cli, ClassEntity, CodesiftError, ComponentEntity, EntitySet,
    FilterOutcome, FunctionEntity, OutputFormat,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> codesift::Result<String> {
    let cli = Cli::parse();
    let query = cli.query_spec();

    if cli.verbose {
        eprintln!(
            "Analyzing {} (query: {:?}, regex: {}, case-sensitive: {})",
            cli.root.display(),
            query.search_term,
            query.use_regex,
            query.case_sensitive
        );
    }

    let result = analyze(&cli.root, &query, &cli.excludes)?;

    if cli.verbose {
        eprintln!(
            "Extracted {} entities across {} file types, {} failed files",
            result.total_entities(),
            result.file_types.len(),
            result.failed_files.len()
        );
    }

    match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result).map_err(|e| {
            CodesiftError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
        }),
        OutputFormat::Text => Ok(render_text(&result, !query.search_term.is_empty())),
    }
}

/// Human-readable summary of an analysis result
fn render_text(result: &AnalysisResult, filtered: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("Analysis of {}\n\n", result.root));

    out.push_str("File types:\n");
    for (ext, count) in &result.file_types {
        out.push_str(&format!("  .{:<10} {}\n", ext, count));
    }
    out.push('\n');

    render_set(&mut out, "C# classes", &result.csharp_classes, filtered, render_class);
    render_set(&mut out, "JS/TS functions", &result.js_functions, filtered, render_function);
    render_set(&mut out, "JS/TS classes", &result.js_classes, filtered, render_class);
    render_set(&mut out, "React components", &result.react_components, filtered, render_component);
    render_set(&mut out, "Vue components", &result.vue_components, filtered, render_component);

    if !result.failed_files.is_empty() {
        out.push_str("Failed files:\n");
        for path in &result.failed_files {
            out.push_str(&format!("  {}\n", path));
        }
    }

    out
}

fn render_set<T>(
    out: &mut String,
    label: &str,
    set: &EntitySet<T>,
    filtered: bool,
    render: fn(&T) -> String,
) {
    out.push_str(&format!("{} ({}):\n", label, set.len()));
    match set.outcome() {
        FilterOutcome::NothingExtracted => out.push_str("  none found\n"),
        FilterOutcome::AllFilteredOut if filtered => {
            out.push_str(&format!("  no matches ({} before filtering)\n", set.discovered))
        }
        FilterOutcome::AllFilteredOut => out.push_str("  none found\n"),
        FilterOutcome::Matched => {
            for entity in &set.entities {
                out.push_str(&format!("  {}\n", render(entity)));
            }
        }
    }
    out.push('\n');
}

fn render_function(f: &FunctionEntity) -> String {
    format!(
        "{}({}) [{}]",
        f.name,
        truncate_with_ellipsis(&f.parameters.join(", "), 60),
        f.file
    )
}

fn render_class(c: &ClassEntity) -> String {
    let methods: Vec<&str> = c.methods.iter().map(|m| m.name.as_str()).collect();
    format!(
        "{} ({} methods: {}) [{}]",
        c.name,
        c.methods.len(),
        truncate_with_ellipsis(&methods.join(", "), 60),
        c.file
    )
}

fn render_component(c: &ComponentEntity) -> String {
    let mut parts = Vec::new();
    if !c.props.is_empty() {
        parts.push(format!("props: {}", c.props.join(", ")));
    }
    if !c.hooks.is_empty() {
        parts.push(format!("hooks: {}", c.hooks.join(", ")));
    }
    if !c.data.is_empty() {
        parts.push(format!("data: {}", c.data.join(", ")));
    }
    if !c.methods.is_empty() {
        parts.push(format!("methods: {}", c.methods.join(", ")));
    }
    if !c.computed.is_empty() {
        parts.push(format!("computed: {}", c.computed.join(", ")));
    }
    if c.setup_syntax {
        parts.push("setup".to_string());
    }
    format!(
        "{} ({}) [{}]",
        c.name,
        truncate_with_ellipsis(&parts.join("; "), 100),
        c.file
    )
}
