//! draw.io cell style strings.
//!
//! A draw.io style is a `;`-terminated list of entries, each either a bare
//! shape keyword (`rhombus`) or a `key=value` pair (`rounded=1`). [`CellStyle`]
//! builds these strings in a fixed entry order so the emitted document is
//! reproducible.

use std::fmt;

use crate::semantic::{EdgeStyle, Shape};

/// A single entry of a style string.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Keyword(&'static str),
    Pair(&'static str, &'static str),
}

/// An ordered draw.io style string.
///
/// # Examples
///
/// ```
/// # use drawmaid_core::{semantic::{EdgeStyle, Shape}, style::CellStyle};
/// assert_eq!(
///     CellStyle::for_shape(Shape::Rounded).to_string(),
///     "rounded=1;whiteSpace=wrap;html=1;"
/// );
/// assert_eq!(
///     CellStyle::for_edge(EdgeStyle::Line).to_string(),
///     "endArrow=none;html=1;rounded=0;"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellStyle {
    entries: Vec<Entry>,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bare keyword entry such as `rhombus`.
    pub fn with_keyword(mut self, keyword: &'static str) -> Self {
        self.entries.push(Entry::Keyword(keyword));
        self
    }

    /// Appends a `key=value` entry.
    pub fn with(mut self, key: &'static str, value: &'static str) -> Self {
        self.entries.push(Entry::Pair(key, value));
        self
    }

    /// Returns the vertex style for a node shape.
    pub fn for_shape(shape: Shape) -> Self {
        let style = match shape {
            Shape::Rectangle => Self::new().with("rounded", "0"),
            Shape::Rounded => Self::new().with("rounded", "1"),
            Shape::Rhombus => Self::new().with_keyword("rhombus"),
        };
        style.with("whiteSpace", "wrap").with("html", "1")
    }

    /// Returns the edge style for a line style.
    pub fn for_edge(style: EdgeStyle) -> Self {
        let end_arrow = match style {
            EdgeStyle::Arrow => "classic",
            EdgeStyle::Line => "none",
        };
        Self::new()
            .with("endArrow", end_arrow)
            .with("html", "1")
            .with("rounded", "0")
    }
}

impl fmt::Display for CellStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry {
                Entry::Keyword(keyword) => write!(f, "{keyword};")?,
                Entry::Pair(key, value) => write!(f, "{key}={value};")?,
            }
        }
        Ok(())
    }
}
