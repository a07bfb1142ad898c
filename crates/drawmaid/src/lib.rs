//! Drawmaid - convert Mermaid flowcharts into draw.io diagrams.
//!
//! Parsing, layout, and draw.io export for a restricted Mermaid flowchart
//! notation. Parsing is tolerant: unsupported statements are skipped and
//! reported as diagnostics instead of failing the conversion.

pub mod config;

mod error;
mod export;
mod layout;

pub use drawmaid_core::{geometry, identifier, semantic, style};
pub use drawmaid_parser::{ParseOutput, error as diagnostics};

pub use error::DrawmaidError;

use std::path::Path;

use log::{debug, info, trace, warn};

use config::AppConfig;
use export::Exporter;

/// Builder for parsing and rendering drawmaid diagrams.
///
/// This provides an API for processing flowcharts through parsing, layout,
/// and export stages.
///
/// # Examples
///
/// ```rust
/// use drawmaid::{DiagramBuilder, config::AppConfig};
///
/// let source = "graph TD; A[Start] --> B{Decision};";
///
/// // With custom config
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse source to semantic model
/// let output = builder.parse(source);
/// assert!(output.diagnostics().is_empty());
///
/// // Render semantic model to a draw.io document
/// let document = builder
///     .render_drawio(output.diagram())
///     .expect("Failed to render");
/// assert!(document.contains("node-A"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and document settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse flowchart source into a semantic diagram.
    ///
    /// Parsing never fails. Skipped statements and ignored redeclarations are
    /// returned as diagnostics next to the diagram.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use drawmaid::DiagramBuilder;
    ///
    /// let output = DiagramBuilder::default().parse("A --> B\nnot a statement");
    /// assert_eq!(output.diagram().node_count(), 2);
    /// assert_eq!(output.diagnostics().len(), 1);
    /// ```
    pub fn parse(&self, source: &str) -> ParseOutput {
        info!("Parsing diagram");
        let output = drawmaid_parser::parse(source);

        debug!(
            diagnostics = output.diagnostics().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:? = output.diagram(); "Parsed diagram");

        output
    }

    /// Render a semantic diagram to a draw.io document string.
    ///
    /// # Errors
    ///
    /// Returns `DrawmaidError::Layout` if the layout configuration is unusable,
    /// or `DrawmaidError::Export` if the document cannot be produced.
    pub fn render_drawio(&self, diagram: &semantic::Diagram) -> Result<String, DrawmaidError> {
        let layout = self.layout(diagram)?;
        let exporter = self.exporter(diagram)?;

        let document = exporter.export_layout(&layout)?;
        info!("draw.io document rendered successfully");
        Ok(document)
    }

    /// Render a semantic diagram and write the draw.io document to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::render_drawio`], plus `DrawmaidError::Export`
    /// if the file cannot be written.
    pub fn write_drawio(
        &self,
        diagram: &semantic::Diagram,
        path: impl AsRef<Path>,
    ) -> Result<(), DrawmaidError> {
        let layout = self.layout(diagram)?;
        let exporter = self.exporter(diagram)?;

        exporter.export_to_path(&layout, path.as_ref())?;
        info!(path:? = path.as_ref(); "draw.io document written");
        Ok(())
    }

    /// Parse and render in one step.
    ///
    /// Diagnostics are logged as warnings and otherwise dropped; use
    /// [`DiagramBuilder::parse`] and [`DiagramBuilder::render_drawio`]
    /// separately to report them yourself.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::render_drawio`].
    pub fn convert(&self, source: &str) -> Result<String, DrawmaidError> {
        let output = self.parse(source);
        for diagnostic in output.diagnostics() {
            warn!(code:? = diagnostic.code(); "{diagnostic}");
        }
        self.render_drawio(output.diagram())
    }

    fn exporter<'a>(
        &self,
        diagram: &'a semantic::Diagram,
    ) -> Result<export::drawio::Drawio<'a>, DrawmaidError> {
        let exporter = export::drawio::DrawioBuilder::new()
            .with_document(self.config.document())
            .with_diagram(diagram)
            .build()?;
        Ok(exporter)
    }

    fn layout(&self, diagram: &semantic::Diagram) -> Result<layout::Layout, DrawmaidError> {
        info!(nodes = diagram.node_count(); "Calculating layout");
        let layout = layout::EngineBuilder::from_config(self.config.layout()).build(diagram)?;
        if layout.is_empty() {
            debug!("Diagram has no nodes; rendering root and layer cells only");
        }
        Ok(layout)
    }
}
