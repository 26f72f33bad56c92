//! Tree model for parsed key-value text

use serde_json::Value;

/// A parsed key-value node: either a scalar string or a nested mapping.
///
/// A node is exactly one of the two; the distinction is fixed at parse
/// time and callers navigate with the checked accessors rather than
/// pattern matching everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    Mapping(Mapping),
}

impl Node {
    /// Scalar text, or `None` for mappings.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Mapping(_) => None,
        }
    }

    /// Child mapping, or `None` for scalars.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Scalar(_) => None,
            Self::Mapping(m) => Some(m),
        }
    }

    /// Look up a direct child by key. Returns `None` for scalars and for
    /// missing keys — a missing key is always explicit, never an ambient
    /// empty value.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Bounded-depth lookup following `path` through nested mappings.
    pub fn walk<'a>(&'a self, path: &[&str]) -> Option<&'a Node> {
        let mut current = self;
        for key in path {
            current = current.get(key)?;
        }
        Some(current)
    }

    /// Re-serialize this node to key-value text.
    ///
    /// A mapping at the root is emitted in the implicit top-level form
    /// (no enclosing braces), matching what [`crate::parse`] accepts, so
    /// `parse` and `to_text` round-trip. Key order is preserved and
    /// scalars are emitted verbatim (escaped where required).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Scalar(s) => {
                write_quoted(&mut out, s);
                out.push('\n');
            }
            Self::Mapping(m) => m.write_entries(&mut out, 0),
        }
        out
    }

    /// Convert to a `serde_json::Value` (scalars become strings).
    pub fn to_json(&self) -> Value {
        match self {
            Self::Scalar(s) => Value::String(s.clone()),
            Self::Mapping(m) => {
                let mut object = serde_json::Map::new();
                for (key, value) in m.iter() {
                    object.insert(key.to_string(), value.to_json());
                }
                Value::Object(object)
            }
        }
    }
}

impl From<Mapping> for Node {
    fn from(m: Mapping) -> Self {
        Self::Mapping(m)
    }
}

/// An order-preserving mapping from keys to nodes.
///
/// Backed by an insertion-ordered vector; lookups are linear, which is
/// fine for the small mappings the tool emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair.
    ///
    /// Duplicate keys follow a fixed last-write-wins policy: the new
    /// value replaces the old one in place, so the key keeps the
    /// position of its first occurrence and serialization order stays
    /// stable.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up a scalar value by key.
    pub fn get_scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Node::as_scalar)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    fn write_entries(&self, out: &mut String, depth: usize) {
        for (key, value) in &self.entries {
            for _ in 0..depth {
                out.push('\t');
            }
            write_quoted(out, key);
            match value {
                Node::Scalar(s) => {
                    out.push('\t');
                    write_quoted(out, s);
                    out.push('\n');
                }
                Node::Mapping(m) => {
                    out.push('\n');
                    for _ in 0..depth {
                        out.push('\t');
                    }
                    out.push_str("{\n");
                    m.write_entries(out, depth + 1);
                    for _ in 0..depth {
                        out.push('\t');
                    }
                    out.push_str("}\n");
                }
            }
        }
    }
}

fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
}
