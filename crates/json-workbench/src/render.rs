//! Tree rendering of a parsed document.

use serde_json::Value;

/// Capability seam for turning a parsed document into a displayable tree.
///
/// The session owns one renderer and never interprets its output; richer
/// front-ends plug in their own implementation.
pub trait TreeRender {
    fn render(&self, value: &Value) -> String;
}

/// Plain-text renderer, one node per line with box-drawing branches.
///
/// Containers are labelled `{}` and `[]`, object keys keep their JSON
/// escaping, array elements are labelled by index.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTree;

impl TreeRender for TextTree {
    fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        out.push_str(&node_label(value));
        write_children(value, "", &mut out);
        out
    }
}

fn node_label(value: &Value) -> String {
    match value {
        Value::Object(_) => "{}".to_string(),
        Value::Array(_) => "[]".to_string(),
        scalar => scalar.to_string(),
    }
}

fn write_children(value: &Value, tab: &str, out: &mut String) {
    let children: Vec<(String, &Value)> = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, child)| (Value::String(key.clone()).to_string(), child))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, child)| (format!("[{index}]"), child))
            .collect(),
        _ => return,
    };
    let last = children.len().saturating_sub(1);
    for (position, (label, child)) in children.into_iter().enumerate() {
        let connector = if position == last { "└─" } else { "├─" };
        out.push('\n');
        out.push_str(tab);
        out.push_str(connector);
        out.push(' ');
        out.push_str(&label);
        out.push_str(": ");
        out.push_str(&node_label(child));
        let child_tab = format!("{tab}{}  ", if position == last { " " } else { "│" });
        write_children(child, &child_tab, out);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
