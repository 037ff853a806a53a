use super::*;
use std::error::Error as StdError;
use std::fmt;

pub(crate) const DEFAULT_DIAGNOSTIC_LOG_LIMIT: usize = 10_000;
pub(crate) const DOM_SNIPPET_MAX_CHARS: usize = 200;
// Recursive tree walks grow the stack instead of overflowing on deep markup.
pub(crate) const STACK_RED_ZONE: usize = 64 * 1024;
pub(crate) const STACK_GROW_SIZE: usize = 1024 * 1024;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Markup could not be turned into a document.
    HtmlParse(String),
    /// An assertion selector matched nothing.
    SelectorNotFound(String),
    /// The selector uses syntax outside the supported subset.
    UnsupportedSelector(String),
    /// No element carries the requested `name` attribute.
    FieldNotFound(String),
    /// The node exists but is not an element; holds the operation name.
    NotAnElement(String),
    InvalidArgument(String),
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(detail) => write!(f, "html parse error: {detail}"),
            Self::SelectorNotFound(selector) => write!(f, "selector not found: {selector}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::FieldNotFound(field) => write!(f, "Input with name \"{field}\" not found"),
            Self::NotAnElement(operation) => write!(f, "{operation} target is not an element"),
            Self::InvalidArgument(detail) => write!(f, "invalid argument: {detail}"),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => {
                write!(f, "assertion failed for {selector}: ")?;
                write!(f, "expected {expected}, actual {actual}, snippet {dom_snippet}")
            }
        }
    }
}

impl StdError for Error {}

/// Handle to a node inside one [`Document`].
///
/// Handles stay valid after the node is detached, so a replaced input can
/// still be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) node_type: NodeType,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: Attributes,
}

/// Attribute list in insertion order. Replacement copies depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|(key, _)| key == name)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|index| self.0[index].1.as_str())
    }

    pub(crate) fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Overwrites in place when `name` is present, appends otherwise.
    pub(crate) fn insert(&mut self, name: String, value: String) {
        match self.position(&name) {
            Some(index) => self.0[index].1 = value,
            None => self.0.push((name, value)),
        }
    }

    // Markup keeps the first of repeated attributes.
    pub(crate) fn insert_if_absent(&mut self, name: String, value: String) {
        if !self.contains_key(&name) {
            self.0.push((name, value));
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        self.0.clone()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Dom {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    /// Connected elements by `id`, in document order.
    pub(crate) id_index: HashMap<String, Vec<NodeId>>,
}

pub(crate) struct ParseOutput {
    pub(crate) dom: Dom,
}

/// Appends `value` with markup characters escaped; quotes only inside
/// attribute values.
pub(crate) fn escape_html_into(out: &mut String, value: &str, in_attribute: bool) {
    for ch in value.chars() {
        let escaped = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' if in_attribute => "&quot;",
            _ => {
                out.push(ch);
                continue;
            }
        };
        out.push_str(escaped);
    }
}

pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_update_in_place_and_keep_order() {
        let mut attrs = Attributes::new();
        attrs.insert("b".into(), "1".into());
        attrs.insert("a".into(), "2".into());
        attrs.insert("b".into(), "3".into());
        attrs.insert_if_absent("a".into(), "ignored".into());
        assert_eq!(
            attrs.iter().collect::<Vec<_>>(),
            vec![("b", "3"), ("a", "2")]
        );
    }

    #[test]
    fn snippets_are_cut_on_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé...");
        assert_eq!(truncate_chars("hé", 2), "hé");
    }
}
