//! Classified statements.
//!
//! These types sit between the classifier and the graph builder. They borrow
//! from the source text and carry no identity resolution yet.

use drawmaid_core::semantic::{EdgeStyle, Shape};

/// A mention of a node, optionally with a shape declaration.
///
/// `A` is a bare mention; `A[Start]` declares label `Start` with a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef<'src> {
    pub id: &'src str,
    pub declaration: Option<(Shape, &'src str)>,
}

impl<'src> NodeRef<'src> {
    pub fn bare(id: &'src str) -> Self {
        Self {
            id,
            declaration: None,
        }
    }

    pub fn declared(id: &'src str, shape: Shape, label: &'src str) -> Self {
        Self {
            id,
            declaration: Some((shape, label)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeStatement<'src> {
    pub source: NodeRef<'src>,
    pub target: NodeRef<'src>,
    pub label: Option<&'src str>,
    pub style: EdgeStyle,
}

/// A statement the builder knows how to fold into the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Statement<'src> {
    Node(NodeRef<'src>),
    Edge(EdgeStatement<'src>),
}
