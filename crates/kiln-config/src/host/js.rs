//! Pretty printer for the JavaScript expressions a configuration module needs.

use serde_json::{Number, Value};

const INDENT: &str = "  ";

/// JavaScript expression tree
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Js {
    Null,
    Bool(bool),
    Num(Number),
    Str(String),
    /// Regex literal built from the pattern source
    Regex(String),
    /// Emitted verbatim
    Expr(String),
    Array(Vec<Js>),
    Object(Vec<(String, Js)>),
    New { ctor: &'static str, args: Vec<Js> },
}

impl Js {
    pub(crate) fn str(value: impl Into<String>) -> Self {
        Js::Str(value.into())
    }

    pub(crate) fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Js)>) -> Self {
        Js::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, 0);
        out
    }

    fn write(&self, out: &mut String, depth: usize) {
        match self {
            Js::Null => out.push_str("null"),
            Js::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Js::Num(n) => out.push_str(&n.to_string()),
            Js::Str(s) => out.push_str(&string_literal(s)),
            Js::Regex(pattern) => out.push_str(&regex_literal(pattern)),
            Js::Expr(expr) => out.push_str(expr),
            Js::Array(items) if items.is_empty() => out.push_str("[]"),
            Js::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    indent(out, depth + 1);
                    item.write(out, depth + 1);
                    separator(out, i, items.len());
                }
                indent(out, depth);
                out.push(']');
            }
            Js::Object(entries) if entries.is_empty() => out.push_str("{}"),
            Js::Object(entries) => {
                out.push_str("{\n");
                for (i, (key, value)) in entries.iter().enumerate() {
                    indent(out, depth + 1);
                    out.push_str(&property_key(key));
                    out.push_str(": ");
                    value.write(out, depth + 1);
                    separator(out, i, entries.len());
                }
                indent(out, depth);
                out.push('}');
            }
            Js::New { ctor, args } => {
                out.push_str("new ");
                out.push_str(ctor);
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    arg.write(out, depth);
                }
                out.push(')');
            }
        }
    }
}

impl From<&Value> for Js {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Js::Null,
            Value::Bool(b) => Js::Bool(*b),
            Value::Number(n) => Js::Num(n.clone()),
            Value::String(s) => Js::Str(s.clone()),
            Value::Array(items) => Js::Array(items.iter().map(Js::from).collect()),
            Value::Object(map) => Js::object(map.iter().map(|(k, v)| (k.clone(), Js::from(v)))),
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn separator(out: &mut String, index: usize, len: usize) {
    if index + 1 < len {
        out.push(',');
    }
    out.push('\n');
}

/// JSON string escaping is valid JavaScript.
pub(crate) fn string_literal(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// `/pattern/` with unescaped slashes escaped; `//` would open a comment.
pub(crate) fn regex_literal(pattern: &str) -> String {
    if pattern.is_empty() {
        return "/(?:)/".to_string();
    }

    let mut out = String::with_capacity(pattern.len() + 2);
    out.push('/');
    let mut escaped = false;
    for c in pattern.chars() {
        match c {
            '/' if !escaped => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    out.push('/');
    out
}
