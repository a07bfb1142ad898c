//! The flowchart diagram container.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

use crate::{
    identifier::Id,
    semantic::element::{Edge, Node},
};

/// Flow direction declared in the diagram header.
///
/// The direction is recorded for completeness; the layout engine does not
/// consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top to bottom (`TD`, also spelled `TB`).
    TopDown,
    /// Left to right (`LR`).
    LeftRight,
    /// Right to left (`RL`).
    RightLeft,
    /// Bottom to top (`BT`).
    BottomTop,
}

impl FromStr for Direction {
    type Err = String;

    /// Parses a header direction token, ignoring ASCII case.
    ///
    /// ```
    /// # use drawmaid_core::semantic::Direction;
    /// assert_eq!("LR".parse(), Ok(Direction::LeftRight));
    /// assert_eq!("tb".parse(), Ok(Direction::TopDown));
    /// assert!("XY".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TD" | "TB" => Ok(Self::TopDown),
            "LR" => Ok(Self::LeftRight),
            "RL" => Ok(Self::RightLeft),
            "BT" => Ok(Self::BottomTop),
            _ => Err(format!("unknown flowchart direction `{s}`")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopDown => write!(f, "TD"),
            Self::LeftRight => write!(f, "LR"),
            Self::RightLeft => write!(f, "RL"),
            Self::BottomTop => write!(f, "BT"),
        }
    }
}

/// A complete flowchart: nodes in discovery order plus edges in statement order.
///
/// # Examples
///
/// ```
/// # use drawmaid_core::{identifier::Id, semantic::{Diagram, Edge, EdgeStyle, Node}};
/// let a = Id::new("A");
/// let b = Id::new("B");
///
/// let diagram = Diagram::new(
///     None,
///     vec![Node::from_id(a), Node::from_id(b)],
///     vec![Edge::new(a, b, None, EdgeStyle::Arrow)],
/// );
///
/// assert_eq!(diagram.node_count(), 2);
/// assert_eq!(diagram.node(b).map(|node| node.label()), Some("B"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    direction: Option<Direction>,
    nodes: IndexMap<Id, Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates a diagram from nodes in discovery order and edges in statement order.
    ///
    /// Node ids are expected to be unique; a repeated id replaces the earlier
    /// node's contents but keeps its original position in the order.
    pub fn new(
        direction: Option<Direction>,
        nodes: impl IntoIterator<Item = Node>,
        edges: Vec<Edge>,
    ) -> Self {
        let nodes = nodes.into_iter().map(|node| (node.id(), node)).collect();
        Self {
            direction,
            nodes,
            edges,
        }
    }

    /// Returns the header direction, if one was declared.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Iterates over nodes in discovery order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.nodes.values()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns edges in statement order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `true` if the diagram has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::{EdgeStyle, Shape};

    #[test]
    fn test_direction_from_str() {
        assert_eq!("TD".parse(), Ok(Direction::TopDown));
        assert_eq!("TB".parse(), Ok(Direction::TopDown));
        assert_eq!("lr".parse(), Ok(Direction::LeftRight));
        assert_eq!("RL".parse(), Ok(Direction::RightLeft));
        assert_eq!("Bt".parse(), Ok(Direction::BottomTop));
        assert!("DOWN".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_display_round_trip() {
        for direction in [
            Direction::TopDown,
            Direction::LeftRight,
            Direction::RightLeft,
            Direction::BottomTop,
        ] {
            assert_eq!(direction.to_string().parse(), Ok(direction));
        }
    }

    #[test]
    fn test_default_is_empty() {
        let diagram = Diagram::default();

        assert!(diagram.is_empty());
        assert_eq!(diagram.direction(), None);
        assert_eq!(diagram.nodes().len(), 0);
        assert!(diagram.edges().is_empty());
    }

    #[test]
    fn test_nodes_keep_discovery_order() {
        let ids = ["Zeta", "Alpha", "Mid"].map(Id::new);
        let diagram = Diagram::new(None, ids.map(Node::from_id), Vec::new());

        let order: Vec<Id> = diagram.nodes().map(Node::id).collect();
        assert_eq!(order, ids.to_vec());
    }

    #[test]
    fn test_lookup() {
        let a = Id::new("A");
        let diagram = Diagram::new(
            Some(Direction::LeftRight),
            vec![Node::new(a, "Start", Shape::Rounded)],
            vec![Edge::new(a, a, None, EdgeStyle::Line)],
        );

        assert_eq!(diagram.direction(), Some(Direction::LeftRight));
        assert_eq!(diagram.node(a).map(Node::label), Some("Start"));
        assert!(diagram.node(Id::new("missing")).is_none());
        assert_eq!(diagram.edges().len(), 1);
        assert!(!diagram.is_empty());
    }
}
