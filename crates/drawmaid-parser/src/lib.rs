//! # Drawmaid Parser
//!
//! Tolerant parser for the Mermaid flowchart subset understood by drawmaid.
//! Parsing never fails: statements that cannot be used are skipped and
//! reported as warning [`Diagnostic`](error::Diagnostic)s next to the
//! resulting diagram.
//!
//! ## Usage
//!
//! ```
//! # use drawmaid_parser::parse;
//! let output = parse("graph TD; A[Start] --> B{Decision};");
//!
//! assert_eq!(output.diagram().node_count(), 2);
//! assert_eq!(output.diagram().edges().len(), 1);
//! assert!(output.diagnostics().is_empty());
//! ```

mod builder;
mod classifier;
pub mod error;
mod normalizer;
#[cfg(test)]
mod parser_tests;
mod span;
mod statement;

pub use span::{Span, Spanned};

use log::{debug, info};

use drawmaid_core::semantic::Diagram;

use builder::GraphBuilder;
use error::{Diagnostic, DiagnosticCollector, ErrorCode};

/// The result of parsing: the diagram plus every diagnostic raised on the way.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    diagram: Diagram,
    diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Diagnostics in the order they were raised.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagram(self) -> Diagram {
        self.diagram
    }

    pub fn into_parts(self) -> (Diagram, Vec<Diagnostic>) {
        (self.diagram, self.diagnostics)
    }
}

/// Parse flowchart source text into a diagram.
///
/// The pipeline runs in three steps:
///
/// 1. **Normalize** - Split into statements, drop comments, read the header
/// 2. **Classify** - Match each statement against the supported forms
/// 3. **Build** - Fold statements into nodes and edges
///
/// Unrecognized statements are skipped with an [`ErrorCode::E200`] warning.
pub fn parse(source: &str) -> ParseOutput {
    info!(bytes = source.len(); "Parsing flowchart");
    let mut collector = DiagnosticCollector::new();

    // Step 1: Normalize
    let normalized = normalizer::normalize(source, &mut collector);

    // Steps 2 and 3: Classify and build
    let mut builder = GraphBuilder::new();
    for statement in &normalized.statements {
        match classifier::classify(statement.inner()) {
            Some(classified) => builder.add(classified, statement.span(), &mut collector),
            None => {
                debug!(statement = *statement.inner(); "Skipping unrecognized statement");
                collector.emit(
                    Diagnostic::warning(format!("unrecognized statement `{statement}`"))
                        .with_code(ErrorCode::E200)
                        .with_label(statement.span(), "skipped")
                        .with_help(
                            "supported forms are `id`, `id[label]`, `id(label)`, `id{label}`, \
                             `A --> B`, `A --- B`, `A -- label --> B` and `A --- label --- B`",
                        ),
                );
            }
        }
    }

    let diagram = builder.build(normalized.direction);
    info!(
        nodes = diagram.node_count(),
        edges = diagram.edges().len(),
        diagnostics = collector.len();
        "Parsed flowchart"
    );

    ParseOutput {
        diagram,
        diagnostics: collector.finish(),
    }
}
