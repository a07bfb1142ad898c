//! Graph builder.
//!
//! Folds classified statements into a [`Diagram`]. Nodes are created on first
//! mention and kept in discovery order; edges are appended in statement order.

use indexmap::{IndexMap, map::Entry};
use log::{debug, trace};

use drawmaid_core::{
    identifier::Id,
    semantic::{Diagram, Direction, Edge, Node, Shape},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
    statement::{NodeRef, Statement},
};

/// How a node has been mentioned so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declaration {
    /// Created implicitly as an edge endpoint.
    Undeclared,
    /// Mentioned by a bare `id` statement.
    Referenced,
    /// Given a label and shape explicitly, at this span.
    Declared(Span),
}

#[derive(Debug)]
struct NodeSlot {
    node: Node,
    declaration: Declaration,
}

/// Accumulates nodes and edges.
///
/// The first explicit declaration of a node decides its label and shape.
/// Bare mentions never downgrade a node, and a later conflicting declaration
/// is reported and ignored.
#[derive(Debug, Default)]
pub(crate) struct GraphBuilder {
    nodes: IndexMap<Id, NodeSlot>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one classified statement found at `span`.
    pub fn add(&mut self, statement: Statement<'_>, span: Span, collector: &mut DiagnosticCollector) {
        match statement {
            Statement::Node(node) => {
                self.mention(node, Declaration::Referenced, span, collector);
            }
            Statement::Edge(edge) => {
                let source = self.mention(edge.source, Declaration::Undeclared, span, collector);
                let target = self.mention(edge.target, Declaration::Undeclared, span, collector);
                debug!(
                    source:%, target:%, label:? = edge.label, style:% = edge.style;
                    "Edge"
                );
                self.edges.push(Edge::new(
                    source,
                    target,
                    edge.label.map(str::to_owned),
                    edge.style,
                ));
            }
        }
    }

    /// Consumes the builder and returns the finished diagram.
    pub fn build(self, direction: Option<Direction>) -> Diagram {
        let diagram = Diagram::new(
            direction,
            self.nodes.into_values().map(|slot| slot.node),
            self.edges,
        );
        trace!(diagram:?; "Built diagram");
        diagram
    }

    /// Records a mention of a node and returns its id.
    ///
    /// `implicit` is the declaration state a mention without a shape gives a
    /// node it creates.
    fn mention(
        &mut self,
        node_ref: NodeRef<'_>,
        implicit: Declaration,
        span: Span,
        collector: &mut DiagnosticCollector,
    ) -> Id {
        let id = Id::new(node_ref.id);

        match self.nodes.entry(id) {
            Entry::Vacant(entry) => {
                let (node, declaration) = match node_ref.declaration {
                    Some((shape, label)) => (Node::new(id, label, shape), Declaration::Declared(span)),
                    None => (Node::from_id(id), implicit),
                };
                debug!(id:%, declaration:?; "New node");
                entry.insert(NodeSlot { node, declaration });
            }
            Entry::Occupied(mut entry) => {
                let slot = entry.get_mut();
                match (node_ref.declaration, slot.declaration) {
                    (None, Declaration::Undeclared) => slot.declaration = implicit,
                    (None, _) => {}
                    (Some((shape, label)), Declaration::Declared(first)) => {
                        if slot.node.label() != label || slot.node.shape() != shape {
                            collector.emit(conflicting_declaration(&slot.node, shape, label, span, first));
                        }
                    }
                    (Some((shape, label)), _) => {
                        debug!(id:%, label, shape:%; "Upgrading node");
                        slot.node.redeclare(label, shape);
                        slot.declaration = Declaration::Declared(span);
                    }
                }
            }
        }

        id
    }
}

fn conflicting_declaration(
    node: &Node,
    shape: Shape,
    label: &str,
    span: Span,
    first: Span,
) -> Diagnostic {
    Diagnostic::warning(format!(
        "node `{}` is already declared as {} `{}`; ignoring {shape} `{label}`",
        node.id(),
        node.shape(),
        node.label(),
    ))
    .with_code(ErrorCode::E300)
    .with_label(span, "conflicting declaration")
    .with_secondary_label(first, "first declared here")
    .with_help("the first explicit declaration is kept")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::EdgeStatement;
    use drawmaid_core::semantic::EdgeStyle;

    fn declaration(builder: &GraphBuilder, id: &str) -> Declaration {
        builder.nodes[&Id::new(id)].declaration
    }

    fn edge<'a>(source: NodeRef<'a>, target: NodeRef<'a>) -> Statement<'a> {
        Statement::Edge(EdgeStatement {
            source,
            target,
            label: None,
            style: EdgeStyle::Arrow,
        })
    }

    #[test]
    fn test_declaration_tri_state() {
        let mut collector = DiagnosticCollector::new();
        let mut builder = GraphBuilder::new();

        builder.add(edge(NodeRef::bare("A"), NodeRef::bare("B")), Span::new(0..7), &mut collector);
        assert_eq!(declaration(&builder, "A"), Declaration::Undeclared);
        assert_eq!(declaration(&builder, "B"), Declaration::Undeclared);

        builder.add(Statement::Node(NodeRef::bare("A")), Span::new(8..9), &mut collector);
        assert_eq!(declaration(&builder, "A"), Declaration::Referenced);

        builder.add(
            Statement::Node(NodeRef::declared("A", Shape::Rounded, "Start")),
            Span::new(10..20),
            &mut collector,
        );
        assert_eq!(declaration(&builder, "A"), Declaration::Declared(Span::new(10..20)));

        // Bare mentions never downgrade.
        builder.add(Statement::Node(NodeRef::bare("A")), Span::new(21..22), &mut collector);
        builder.add(edge(NodeRef::bare("B"), NodeRef::bare("A")), Span::new(23..30), &mut collector);
        assert_eq!(declaration(&builder, "A"), Declaration::Declared(Span::new(10..20)));
        assert_eq!(declaration(&builder, "B"), Declaration::Undeclared);

        assert!(collector.finish().is_empty());
    }

    #[test]
    fn test_first_explicit_declaration_wins() {
        let mut collector = DiagnosticCollector::new();
        let mut builder = GraphBuilder::new();

        builder.add(
            Statement::Node(NodeRef::declared("A", Shape::Rectangle, "One")),
            Span::new(0..6),
            &mut collector,
        );
        builder.add(
            Statement::Node(NodeRef::declared("A", Shape::Rhombus, "Two")),
            Span::new(7..13),
            &mut collector,
        );

        let diagram = builder.build(None);
        let node = diagram.node(Id::new("A")).expect("node exists");
        assert_eq!(node.label(), "One");
        assert_eq!(node.shape(), Shape::Rectangle);

        let diagnostics = collector.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E300));
        assert_eq!(diagnostics[0].labels()[0].span(), Span::new(7..13));
        assert_eq!(diagnostics[0].labels()[1].span(), Span::new(0..6));
        assert!(diagnostics[0].labels()[1].is_secondary());
    }

    #[test]
    fn test_identical_redeclaration_is_silent() {
        let mut collector = DiagnosticCollector::new();
        let mut builder = GraphBuilder::new();
        let declared = Statement::Node(NodeRef::declared("A", Shape::Rounded, "Same"));

        builder.add(declared, Span::new(0..9), &mut collector);
        builder.add(declared, Span::new(10..19), &mut collector);

        assert_eq!(builder.build(None).node_count(), 1);
        assert!(collector.finish().is_empty());
    }

    #[test]
    fn test_edge_upgrades_implicit_node() {
        let mut collector = DiagnosticCollector::new();
        let mut builder = GraphBuilder::new();

        builder.add(edge(NodeRef::bare("A"), NodeRef::bare("B")), Span::new(0..7), &mut collector);
        builder.add(
            edge(NodeRef::bare("C"), NodeRef::declared("B", Shape::Rhombus, "Check")),
            Span::new(8..25),
            &mut collector,
        );

        let diagram = builder.build(None);
        let order: Vec<String> = diagram.nodes().map(|node| node.id().to_string()).collect();
        assert_eq!(order, ["A", "B", "C"]);

        let b = diagram.node(Id::new("B")).expect("node exists");
        assert_eq!(b.label(), "Check");
        assert_eq!(b.shape(), Shape::Rhombus);
        assert_eq!(diagram.edges().len(), 2);
    }

    #[test]
    fn test_self_loop_creates_one_node() {
        let mut collector = DiagnosticCollector::new();
        let mut builder = GraphBuilder::new();

        builder.add(edge(NodeRef::bare("A"), NodeRef::bare("A")), Span::new(0..7), &mut collector);

        let diagram = builder.build(Some(Direction::LeftRight));
        assert_eq!(diagram.node_count(), 1);
        assert_eq!(diagram.edges()[0].source(), diagram.edges()[0].target());
        assert_eq!(diagram.direction(), Some(Direction::LeftRight));
    }
}
