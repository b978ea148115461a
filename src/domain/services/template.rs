//! Document template pass
//!
//! Themes are written as EJS templates. Only the output tags are supported:
//!
//! - `<%= expr %>` - value, HTML-escaped
//! - `<%- expr %>` - value, unescaped
//! - `<%# ... %>`  - comment, removed
//! - `<%%`         - literal `<%`
//!
//! `expr` is a dotted path into the render context (`paths.theme`). Unknown
//! paths render as the empty string. Scriptlet tags are left as they are.

use std::path::Path;

use serde_json::{json, Value};

const OPEN: &str = "<%";
const CLOSE: &str = "%>";

/// Build the context themes are rendered against
pub fn render_context(root_dir: &Path, theme_dir: &Path, debug_mode: bool) -> Value {
    json!({
        "debugMode": debug_mode,
        "paths": {
            "root": file_url(root_dir),
            "theme": file_url(theme_dir),
        },
    })
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Render `template` against `context`
pub fn render(template: &str, context: &Value) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let tag = &rest[start..];

        if tag[OPEN.len()..].starts_with('%') {
            output.push_str(OPEN);
            rest = &tag[OPEN.len() + 1..];
            continue;
        }

        let Some(end) = tag.find(CLOSE) else {
            // Unterminated tag, emit verbatim
            output.push_str(tag);
            return output;
        };

        let inner = &tag[OPEN.len()..end];
        match inner.chars().next() {
            Some('=') => output.push_str(&escape_html(&lookup(context, expression(&inner[1..])))),
            Some('-') => output.push_str(&lookup(context, expression(&inner[1..]))),
            Some('#') => {}
            _ => output.push_str(&tag[..end + CLOSE.len()]),
        }
        rest = &tag[end + CLOSE.len()..];
    }

    output.push_str(rest);
    output
}

/// Strip whitespace and EJS whitespace-slurping markers (`-%>`, `_%>`)
fn expression(raw: &str) -> &str {
    raw.trim().trim_end_matches(['-', '_']).trim()
}

fn lookup(context: &Value, path: &str) -> String {
    let found = path
        .split('.')
        .try_fold(context, |value, key| value.get(key.trim()));

    match found {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
