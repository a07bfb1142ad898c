//! End-to-end tests for the parsing pipeline
//!
//! These tests run whole flowcharts through normalization, classification and
//! graph building, and check the resulting diagram and diagnostics.

use drawmaid_core::{
    identifier::Id,
    semantic::{Diagram, Direction, EdgeStyle, Node, Shape},
};

use crate::{error::ErrorCode, parse};

/// Helper to parse a source string and assert it raised no diagnostics
fn parse_clean(source: &str) -> Diagram {
    let output = parse(source);
    assert!(
        output.diagnostics().is_empty(),
        "Expected no diagnostics, got {:?}",
        output.diagnostics()
    );
    output.into_diagram()
}

fn node<'a>(diagram: &'a Diagram, id: &str) -> &'a Node {
    diagram
        .node(Id::new(id))
        .unwrap_or_else(|| panic!("Expected node `{id}`"))
}

fn node_ids(diagram: &Diagram) -> Vec<String> {
    diagram.nodes().map(|node| node.id().to_string()).collect()
}

fn codes(source: &str) -> Vec<ErrorCode> {
    parse(source)
        .diagnostics()
        .iter()
        .filter_map(|diagnostic| diagnostic.code())
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_header_with_shaped_edge() {
    let diagram = parse_clean("graph TD; A[Start] --> B{Decision};");

    assert_eq!(diagram.direction(), Some(Direction::TopDown));
    assert_eq!(node_ids(&diagram), ["A", "B"]);

    let a = node(&diagram, "A");
    assert_eq!(a.label(), "Start");
    assert_eq!(a.shape(), Shape::Rectangle);

    let b = node(&diagram, "B");
    assert_eq!(b.label(), "Decision");
    assert_eq!(b.shape(), Shape::Rhombus);

    assert_eq!(diagram.edges().len(), 1);
    let edge = &diagram.edges()[0];
    assert_eq!(edge.source(), Id::new("A"));
    assert_eq!(edge.target(), Id::new("B"));
    assert_eq!(edge.label(), None);
    assert_eq!(edge.style(), EdgeStyle::Arrow);
}

#[test]
fn test_plain_line_edge_creates_default_nodes() {
    let diagram = parse_clean("A --- B");

    assert_eq!(diagram.direction(), None);
    for id in ["A", "B"] {
        let node = node(&diagram, id);
        assert_eq!(node.label(), id);
        assert_eq!(node.shape(), Shape::Rectangle);
    }
    assert_eq!(diagram.edges().len(), 1);
    assert_eq!(diagram.edges()[0].style(), EdgeStyle::Line);
    assert_eq!(diagram.edges()[0].label(), None);
}

#[test]
fn test_mixed_shapes_and_labeled_edge() {
    let diagram = parse_clean("A[One] --> B(Two); B -- go --> C{Three};");

    assert_eq!(node_ids(&diagram), ["A", "B", "C"]);
    assert_eq!(node(&diagram, "A").shape(), Shape::Rectangle);
    assert_eq!(node(&diagram, "B").shape(), Shape::Rounded);
    assert_eq!(node(&diagram, "B").label(), "Two");
    assert_eq!(node(&diagram, "C").shape(), Shape::Rhombus);
    assert_eq!(node(&diagram, "C").label(), "Three");

    let edges = diagram.edges();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].label(), None);
    assert_eq!(edges[1].label(), Some("go"));
    assert_eq!(edges[1].style(), EdgeStyle::Arrow);
    assert_eq!(edges[1].source(), Id::new("B"));
    assert_eq!(edges[1].target(), Id::new("C"));
}

#[test]
fn test_whitespace_only_input() {
    for source in ["", "   ", "\n\n\t\n", " ; ;\n"] {
        let output = parse(source);
        assert!(output.diagram().is_empty(), "`{source:?}` should be empty");
        assert!(output.diagnostics().is_empty());
    }
}

// =============================================================================
// Node identity
// =============================================================================

#[test]
fn test_declaration_then_bare_reference() {
    let diagram = parse_clean("id[A]\nid");

    assert_eq!(diagram.node_count(), 1);
    assert_eq!(node(&diagram, "id").label(), "A");
}

#[test]
fn test_bare_reference_then_declaration() {
    let diagram = parse_clean("id\nid(Later)");

    assert_eq!(diagram.node_count(), 1);
    assert_eq!(node(&diagram, "id").label(), "Later");
    assert_eq!(node(&diagram, "id").shape(), Shape::Rounded);
}

#[test]
fn test_edge_then_declaration_upgrades() {
    let diagram = parse_clean("A --> B\nB{Check}");

    assert_eq!(node_ids(&diagram), ["A", "B"]);
    assert_eq!(node(&diagram, "B").label(), "Check");
    assert_eq!(node(&diagram, "B").shape(), Shape::Rhombus);
}

#[test]
fn test_conflicting_declaration_keeps_first() {
    let source = "A[First]\nA --> B\nA(Second)";
    let output = parse(source);
    let diagram = output.diagram();

    assert_eq!(node(diagram, "A").label(), "First");
    assert_eq!(node(diagram, "A").shape(), Shape::Rectangle);

    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code(), Some(ErrorCode::E300));
    assert!(diagnostics[0].to_string().starts_with("warning[E300]: node `A`"));

    let labels = diagnostics[0].labels();
    assert_eq!(labels[0].span().slice(source), Some("A(Second)"));
    assert_eq!(labels[1].span().slice(source), Some("A[First]"));
}

#[test]
fn test_ids_are_case_sensitive() {
    let diagram = parse_clean("a --> A");
    assert_eq!(node_ids(&diagram), ["a", "A"]);
}

#[test]
fn test_discovery_order_follows_first_mention() {
    let diagram = parse_clean("C --> A\nB\nA --> D");
    assert_eq!(node_ids(&diagram), ["C", "A", "B", "D"]);
}

// =============================================================================
// Edges
// =============================================================================

#[test]
fn test_edge_label_precedence() {
    let diagram = parse_clean("A -- hi --> B\nA --- hi --- B");
    let edges = diagram.edges();

    assert_eq!(edges[0].label(), Some("hi"));
    assert_eq!(edges[0].style(), EdgeStyle::Arrow);
    assert_eq!(edges[1].label(), Some("hi"));
    assert_eq!(edges[1].style(), EdgeStyle::Line);
}

#[test]
fn test_duplicate_edges_are_kept() {
    let diagram = parse_clean("A --> B\nA --> B");
    assert_eq!(diagram.edges().len(), 2);
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn test_unrecognized_statement_is_skipped() {
    let source = "A --> B\nthis is not valid\nC";
    let output = parse(source);

    assert_eq!(node_ids(output.diagram()), ["A", "B", "C"]);

    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code(), Some(ErrorCode::E200));
    assert_eq!(
        diagnostics[0].labels()[0].span().slice(source),
        Some("this is not valid")
    );
    assert!(diagnostics[0].help().is_some());
}

#[test]
fn test_unsupported_mermaid_constructs_warn() {
    assert_eq!(
        codes("graph TD\nsubgraph one\nA --> B\nend\nclassDef x fill:#f9f"),
        [ErrorCode::E200, ErrorCode::E200]
    );
}

#[test]
fn test_header_diagnostics() {
    assert_eq!(codes("graph UP\nA"), [ErrorCode::E100]);
    assert_eq!(codes("A\nflowchart LR"), [ErrorCode::E101]);
}

#[test]
fn test_comments_produce_nothing() {
    let diagram = parse_clean("%% only a comment\n%% and another");
    assert!(diagram.is_empty());
}
