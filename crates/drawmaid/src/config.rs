//! Configuration types for drawmaid conversion.
//!
//! This module provides configuration structures that control how flowcharts
//! are laid out and how the draw.io document is labelled. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field is
//! optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and document settings.
//! - [`LayoutConfig`] - Origin, column spacing and node size of the row layout.
//! - [`DocumentConfig`] - Host, diagram id and page name written to the document.
//!
//! # Example
//!
//! ```
//! # use drawmaid::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().column_spacing(), 150.0);
//! assert_eq!(config.document().page_name(), "Page-1");
//! ```

use serde::Deserialize;

/// Top-level configuration combining layout and document settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and document configurations.
    pub fn new(layout: LayoutConfig, document: DocumentConfig) -> Self {
        Self { layout, document }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }
}

/// Geometry of the single-row layout.
///
/// Node `i` in discovery order is placed at
/// `(origin_x + i * column_spacing, origin_y)` with a fixed
/// `node_width x node_height` size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    origin_x: f32,
    origin_y: f32,
    column_spacing: f32,
    node_width: f32,
    node_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            origin_y: 50.0,
            column_spacing: 150.0,
            node_width: 120.0,
            node_height: 60.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(origin: (f32, f32), column_spacing: f32, node_size: (f32, f32)) -> Self {
        Self {
            origin_x: origin.0,
            origin_y: origin.1,
            column_spacing,
            node_width: node_size.0,
            node_height: node_size.1,
        }
    }

    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    /// Horizontal distance between the left edges of neighbouring nodes.
    pub fn column_spacing(&self) -> f32 {
        self.column_spacing
    }

    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }
}

/// Labels written into the `mxfile` and `diagram` elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    host: String,
    diagram_id: String,
    page_name: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            host: "app.diagrams.net".to_string(),
            diagram_id: "Diagram1".to_string(),
            page_name: "Page-1".to_string(),
        }
    }
}

impl DocumentConfig {
    pub fn new(
        host: impl Into<String>,
        diagram_id: impl Into<String>,
        page_name: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            diagram_id: diagram_id.into(),
            page_name: page_name.into(),
        }
    }

    /// The editor host recorded on the `mxfile` element.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn diagram_id(&self) -> &str {
        &self.diagram_id
    }

    /// Name of the single page shown in the editor.
    pub fn page_name(&self) -> &str {
        &self.page_name
    }
}
