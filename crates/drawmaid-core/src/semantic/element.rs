//! Flowchart elements: nodes, edges, and their visual variants.

use std::fmt;

use crate::identifier::Id;

/// The outline drawn for a node.
///
/// The bracket pair used in a declaration selects the shape:
/// `id[label]` is a rectangle, `id(label)` is rounded and `id{label}` is a rhombus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Rectangle,
    Rounded,
    Rhombus,
}

impl Shape {
    /// Returns the opening and closing delimiters that declare this shape.
    pub fn delimiters(self) -> (char, char) {
        match self {
            Self::Rectangle => ('[', ']'),
            Self::Rounded => ('(', ')'),
            Self::Rhombus => ('{', '}'),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "rectangle"),
            Self::Rounded => write!(f, "rounded"),
            Self::Rhombus => write!(f, "rhombus"),
        }
    }
}

/// How an edge is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    /// A directed connection ending in an arrowhead (`-->`).
    #[default]
    Arrow,
    /// An undirected connection without arrowheads (`---`).
    Line,
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrow => write!(f, "arrow"),
            Self::Line => write!(f, "line"),
        }
    }
}

/// A flowchart node.
///
/// # Examples
///
/// ```
/// # use drawmaid_core::{identifier::Id, semantic::{Node, Shape}};
/// let node = Node::new(Id::new("B"), "Decision", Shape::Rhombus);
/// assert_eq!(node.label(), "Decision");
///
/// let plain = Node::from_id(Id::new("C"));
/// assert_eq!(plain.label(), "C");
/// assert_eq!(plain.shape(), Shape::Rectangle);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: Id,
    label: String,
    shape: Shape,
}

impl Node {
    /// Creates a node with an explicit label and shape.
    pub fn new(id: Id, label: impl Into<String>, shape: Shape) -> Self {
        Self {
            id,
            label: label.into(),
            shape,
        }
    }

    /// Creates a default node: rectangle shape, labeled with its own id.
    pub fn from_id(id: Id) -> Self {
        Self {
            id,
            label: id.as_string(),
            shape: Shape::default(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Replaces label and shape, keeping the id.
    pub fn redeclare(&mut self, label: impl Into<String>, shape: Shape) {
        self.label = label.into();
        self.shape = shape;
    }
}

/// A connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: Id,
    target: Id,
    label: Option<String>,
    style: EdgeStyle,
}

impl Edge {
    /// Creates a new edge.
    ///
    /// # Arguments
    ///
    /// * `source` - Id of the node the edge starts at
    /// * `target` - Id of the node the edge ends at
    /// * `label` - Optional text shown on the edge
    /// * `style` - Arrow or plain line
    pub fn new(source: Id, target: Id, label: Option<String>, style: EdgeStyle) -> Self {
        Self {
            source,
            target,
            label,
            style,
        }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the edge label, or `None` for an unlabeled edge.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn style(&self) -> EdgeStyle {
        self.style
    }
}
