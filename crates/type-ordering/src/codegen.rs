//! Rendering of the relation table as a source artifact
//!
//! Every rendering lists the 256 relations by vocabulary name in row-major
//! order and ends with a newline.

use crate::algorithms::table::RelationTable;
use crate::config::{OutputFormat, RenderConfig};
use crate::domain::errors::OrderingError;

/// Banner recognised by linters and code review tools
pub const GENERATED_HEADER: &str = "// Code generated by relation-gen. DO NOT EDIT.";

/// Columns a tab occupies when measuring Go lines
const GO_TAB_WIDTH: usize = 8;

const RUST_INDENT: &str = "    ";

/// Render `table` according to `config`.
pub fn render(table: &RelationTable, config: &RenderConfig) -> Result<String, OrderingError> {
    config.validate()?;
    match config.format {
        OutputFormat::Go => Ok(render_go(table, config)),
        OutputFormat::Rust => Ok(render_rust(table, config)),
        OutputFormat::Json => render_json(table),
    }
}

fn render_go(table: &RelationTable, config: &RenderConfig) -> String {
    let mut out = String::new();
    if config.emit_header {
        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
    }
    if let Some(package) = &config.package {
        out.push_str(&format!("package {}\n\n", package));
    }

    out.push_str(&format!(
        "// {} holds the relation of type(val1) to type(val2) at index type1<<4 | type2.\n",
        config.table_name
    ));
    out.push_str(&format!(
        "var {} = [{}]{}{{\n",
        config.table_name,
        table.len(),
        config.enum_name
    ));

    let items: Vec<String> = table
        .iter()
        .map(|r| format!("{},", r.vocabulary_name()))
        .collect();
    for line in wrap_items(&items, GO_TAB_WIDTH, config.max_line_width) {
        out.push('\t');
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("}\n");
    out
}

fn render_rust(table: &RelationTable, config: &RenderConfig) -> String {
    let enum_name = upper_camel(&config.enum_name);
    let table_name = screaming_snake(&config.table_name);

    let mut out = String::new();
    if config.emit_header {
        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
    }

    out.push_str("/// Relation of type(val1) to type(val2) at index `type1 << 4 | type2`.\n");
    out.push_str("#[rustfmt::skip]\n");
    out.push_str(&format!(
        "pub static {}: [{}; {}] = [\n",
        table_name,
        enum_name,
        table.len()
    ));

    let items: Vec<String> = table
        .iter()
        .map(|r| format!("{}::{},", enum_name, r.vocabulary_name()))
        .collect();
    for line in wrap_items(&items, RUST_INDENT.len(), config.max_line_width) {
        out.push_str(RUST_INDENT);
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("];\n");
    out
}

fn render_json(table: &RelationTable) -> Result<String, OrderingError> {
    let mut out = serde_json::to_string_pretty(table)?;
    out.push('\n');
    Ok(out)
}

/// Greedy fill: items joined by single spaces, no line wider than
/// `max_width` once indented. An item wider than the limit gets its own line.
fn wrap_items(items: &[String], indent_width: usize, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for item in items {
        if current.is_empty() {
            current.push_str(item);
            continue;
        }
        if indent_width + current.len() + 1 + item.len() > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(item);
        } else {
            current.push(' ');
            current.push_str(item);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// `typesRelation` -> `TypesRelation`
fn upper_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// `typesRelations` -> `TYPES_RELATIONS`
fn screaming_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c.to_ascii_uppercase());
    }
    out
}
