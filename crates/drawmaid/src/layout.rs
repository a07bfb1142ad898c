//! Layout engine for positioning flowchart nodes.
//!
//! Nodes are placed in a single row, left to right, in the order the parser
//! discovered them. Positions depend only on that order: edges and the header
//! direction are ignored, so identical input always yields identical
//! coordinates.
//!
//! # Pipeline Position
//!
//! ```text
//! Semantic Model (Diagram)
//!     ↓ layout (this module)
//! Layout
//!     ↓ export
//! draw.io document
//! ```

use indexmap::IndexMap;
use log::{debug, trace};

use drawmaid_core::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
    semantic::Diagram,
};

use crate::{config::LayoutConfig, error::DrawmaidError};

/// Positioned nodes, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: IndexMap<Id, Bounds>,
}

impl Layout {
    /// Returns the bounds assigned to a node.
    pub fn get(&self, id: Id) -> Option<Bounds> {
        self.positions.get(&id).copied()
    }

    /// Iterates over node bounds in discovery order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Id, Bounds)> + '_ {
        self.positions.iter().map(|(id, bounds)| (*id, *bounds))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The smallest bounds containing every node, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<Bounds> {
        self.positions
            .values()
            .copied()
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

/// Builder for the row layout engine.
/// Builder is not reuseable after build() is called.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    origin: Point,
    column_spacing: f32,
    node_size: Size,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl EngineBuilder {
    /// Create a new engine builder with the default geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine builder from a layout configuration section
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            origin: Point::new(config.origin_x(), config.origin_y()),
            column_spacing: config.column_spacing(),
            node_size: Size::new(config.node_width(), config.node_height()),
        }
    }

    /// Set the top-left corner of the first node
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the horizontal distance between neighbouring nodes' left edges
    pub fn with_column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Set the size every node is drawn with
    pub fn with_node_size(mut self, size: Size) -> Self {
        self.node_size = size;
        self
    }

    /// Calculate positions for every node of `diagram`.
    ///
    /// # Errors
    /// Returns `DrawmaidError::Layout` if the configured geometry is not finite,
    /// if the spacing or node size is not positive, or if nodes would overlap
    /// because they are wider than the column spacing.
    pub fn build(self, diagram: &Diagram) -> Result<Layout, DrawmaidError> {
        self.validate()?;

        let positions: IndexMap<Id, Bounds> = diagram
            .nodes()
            .enumerate()
            .map(|(index, node)| {
                let x = self.origin.x() + index as f32 * self.column_spacing;
                let bounds = self.origin.with_x(x).to_bounds(self.node_size);
                trace!(id:% = node.id(), x, y = bounds.min_y(); "Placed node");
                (node.id(), bounds)
            })
            .collect();

        debug!(nodes = positions.len(); "Layout calculated");
        Ok(Layout { positions })
    }

    fn validate(&self) -> Result<(), DrawmaidError> {
        let values = [
            ("origin_x", self.origin.x()),
            ("origin_y", self.origin.y()),
            ("column_spacing", self.column_spacing),
            ("node_width", self.node_size.width()),
            ("node_height", self.node_size.height()),
        ];
        if let Some((name, value)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(DrawmaidError::Layout(format!(
                "`{name}` must be a finite number, got {value}"
            )));
        }
        if let Some((name, value)) = values[2..].iter().find(|(_, value)| *value <= 0.0) {
            return Err(DrawmaidError::Layout(format!(
                "`{name}` must be positive, got {value}"
            )));
        }
        if self.node_size.width() > self.column_spacing {
            return Err(DrawmaidError::Layout(format!(
                "node width {} exceeds column spacing {}; nodes would overlap",
                self.node_size.width(),
                self.column_spacing
            )));
        }
        Ok(())
    }
}
