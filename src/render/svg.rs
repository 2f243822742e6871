//! SVG element tree
//!
//! Renderers build [`SvgObject`]s: an element name, an insertion-ordered
//! attribute map and child nodes. Attribute keys, values and their order are
//! what downstream document assemblers consume, so they are built exactly
//! once per element and never rewritten.

use indexmap::IndexMap;

/// SVG element names produced by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementName {
    G,
    Path,
    Rect,
    Circle,
    Polygon,
    Text,
}

impl ElementName {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementName::G => "g",
            ElementName::Path => "path",
            ElementName::Rect => "rect",
            ElementName::Circle => "circle",
            ElementName::Polygon => "polygon",
            ElementName::Text => "text",
        }
    }
}

/// A child of an element: either another element or a text run
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(SvgObject),
    Text(String),
}

/// One SVG element with attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct SvgObject {
    pub name: ElementName,
    pub attributes: IndexMap<&'static str, String>,
    pub children: Vec<SvgNode>,
}

impl SvgObject {
    pub fn new(name: ElementName) -> Self {
        Self {
            name,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self::new(ElementName::G)
    }

    /// Set an attribute. Re-setting a key keeps its original position.
    pub fn with_attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value.into());
        self
    }

    /// Set a numeric attribute, formatted with [`fmt_num`].
    pub fn with_num(self, key: &'static str, value: f64) -> Self {
        self.with_attr(key, fmt_num(value))
    }

    pub fn with_child(mut self, child: SvgObject) -> Self {
        self.children.push(SvgNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(SvgNode::Text(text.into()));
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Element children, skipping text runs.
    pub fn elements(&self) -> impl Iterator<Item = &SvgObject> {
        self.children.iter().filter_map(|c| match c {
            SvgNode::Element(e) => Some(e),
            SvgNode::Text(_) => None,
        })
    }

    /// Concatenated text runs directly under this element.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                SvgNode::Text(t) => Some(t.as_str()),
                SvgNode::Element(_) => None,
            })
            .collect()
    }
}

/// Format a number the way JavaScript's `Number#toString` does.
///
/// Shortest round-trip digits, `-0` prints as `0`, and magnitudes outside
/// `[1e-6, 1e21)` switch to exponent form with an explicit `+` on positive
/// exponents. Existing board drawings were produced with this formatting.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", value);
    }

    let s = format!("{:e}", value);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}
