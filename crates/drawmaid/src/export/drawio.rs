//! draw.io document rendering.
//!
//! Produces an uncompressed `mxfile` document:
//!
//! ```text
//! mxfile
//!   diagram
//!     mxGraphModel
//!       root
//!         mxCell id=0                    (root)
//!         mxCell id=1 parent=0           (default layer)
//!         mxCell id=node-<id> vertex=1   (one per node, with mxGeometry)
//!         mxCell id=edge-<n> edge=1      (one per edge, with relative mxGeometry)
//! ```
//!
//! The document is streamed through a `quick_xml` writer, which escapes
//! attribute values.

use log::{debug, info};
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, Event},
};

use drawmaid_core::{
    geometry::{Bounds, Size},
    identifier::Id,
    semantic::{Diagram, Edge, Node},
    style::CellStyle,
};

use super::{Error, Exporter};
use crate::{config::DocumentConfig, layout::Layout};

const ROOT_CELL_ID: &str = "0";
const LAYER_CELL_ID: &str = "1";

/// Default page size of a new draw.io page.
const PAGE_WIDTH: f32 = 850.0;
const PAGE_HEIGHT: f32 = 1100.0;

type XmlWriter = Writer<Vec<u8>>;

/// Cell id of a node's vertex.
pub fn node_cell_id(id: Id) -> String {
    format!("node-{id}")
}

/// Cell id of the `index`-th edge, counting from zero.
pub fn edge_cell_id(index: usize) -> String {
    format!("edge-{index}")
}

/// Builder for [`Drawio`] exporters.
#[derive(Debug, Default)]
pub struct DrawioBuilder<'a> {
    document: DocumentConfig,
    diagram: Option<&'a Diagram>,
}

impl<'a> DrawioBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host, diagram id and page name written to the document
    pub fn with_document(mut self, document: &DocumentConfig) -> Self {
        self.document = document.clone();
        self
    }

    /// Set the diagram whose nodes and edges are exported
    pub fn with_diagram(mut self, diagram: &'a Diagram) -> Self {
        self.diagram = Some(diagram);
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::Render`] if no diagram was set.
    pub fn build(self) -> Result<Drawio<'a>, Error> {
        let diagram = self
            .diagram
            .ok_or_else(|| Error::Render("no diagram to export".to_string()))?;

        Ok(Drawio {
            document: self.document,
            diagram,
        })
    }
}

/// draw.io exporter for one diagram.
#[derive(Debug)]
pub struct Drawio<'a> {
    document: DocumentConfig,
    diagram: &'a Diagram,
}

impl Exporter for Drawio<'_> {
    fn export_layout(&self, layout: &Layout) -> Result<String, Error> {
        self.check_layout(layout)?;

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        start(
            &mut writer,
            "mxfile",
            &[("host", self.document.host()), ("compressed", "false")],
        )?;
        start(
            &mut writer,
            "diagram",
            &[
                ("id", self.document.diagram_id()),
                ("name", self.document.page_name()),
            ],
        )?;
        write_graph_model_start(&mut writer, layout)?;
        start(&mut writer, "root", &[])?;

        empty(&mut writer, "mxCell", &[("id", ROOT_CELL_ID)])?;
        empty(
            &mut writer,
            "mxCell",
            &[("id", LAYER_CELL_ID), ("parent", ROOT_CELL_ID)],
        )?;

        for (id, bounds) in layout.iter() {
            if let Some(node) = self.diagram.node(id) {
                write_vertex_cell(&mut writer, node, bounds)?;
            }
        }
        for (index, edge) in self.diagram.edges().iter().enumerate() {
            write_edge_cell(&mut writer, index, edge)?;
        }
        debug!(
            vertices = self.diagram.node_count(),
            edges = self.diagram.edges().len();
            "Cells rendered"
        );

        for name in ["root", "mxGraphModel", "diagram", "mxfile"] {
            end(&mut writer, name)?;
        }

        let document = String::from_utf8(writer.into_inner())
            .map_err(|err| Error::Render(format!("document is not UTF-8: {err}")))?;
        info!(bytes = document.len(); "draw.io document rendered");
        Ok(document)
    }
}

impl Drawio<'_> {
    /// Every node needs exactly one position and every edge endpoint must be a node.
    fn check_layout(&self, layout: &Layout) -> Result<(), Error> {
        if layout.len() != self.diagram.node_count() {
            return Err(Error::Render(format!(
                "layout has {} positions for {} nodes",
                layout.len(),
                self.diagram.node_count()
            )));
        }
        if let Some(node) = self
            .diagram
            .nodes()
            .find(|node| layout.get(node.id()).is_none())
        {
            return Err(Error::Render(format!(
                "node `{}` has no position in the layout",
                node.id()
            )));
        }

        for (index, edge) in self.diagram.edges().iter().enumerate() {
            for endpoint in [edge.source(), edge.target()] {
                if self.diagram.node(endpoint).is_none() {
                    return Err(Error::Render(format!(
                        "edge {index} references unknown node `{endpoint}`"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn write(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|err| Error::Render(format!("failed to write XML: {err}")))
}

fn start(writer: &mut XmlWriter, name: &str, attributes: &[(&str, &str)]) -> Result<(), Error> {
    let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
    write(writer, Event::Start(element))
}

fn empty(writer: &mut XmlWriter, name: &str, attributes: &[(&str, &str)]) -> Result<(), Error> {
    let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
    write(writer, Event::Empty(element))
}

fn end(writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write_vertex_cell(writer: &mut XmlWriter, node: &Node, bounds: Bounds) -> Result<(), Error> {
    let id = node_cell_id(node.id());
    let style = CellStyle::for_shape(node.shape()).to_string();
    start(
        writer,
        "mxCell",
        &[
            ("id", id.as_str()),
            ("value", node.label()),
            ("style", style.as_str()),
            ("parent", LAYER_CELL_ID),
            ("vertex", "1"),
        ],
    )?;

    let x = bounds.min_x().to_string();
    let y = bounds.min_y().to_string();
    let width = bounds.width().to_string();
    let height = bounds.height().to_string();
    empty(
        writer,
        "mxGeometry",
        &[
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("as", "geometry"),
        ],
    )?;

    end(writer, "mxCell")
}

fn write_edge_cell(writer: &mut XmlWriter, index: usize, edge: &Edge) -> Result<(), Error> {
    let id = edge_cell_id(index);
    let style = CellStyle::for_edge(edge.style()).to_string();
    let source = node_cell_id(edge.source());
    let target = node_cell_id(edge.target());

    let mut attributes = vec![("id", id.as_str())];
    if let Some(label) = edge.label() {
        attributes.push(("value", label));
    }
    attributes.extend([
        ("style", style.as_str()),
        ("parent", LAYER_CELL_ID),
        ("edge", "1"),
        ("source", source.as_str()),
        ("target", target.as_str()),
    ]);
    start(writer, "mxCell", &attributes)?;
    empty(
        writer,
        "mxGeometry",
        &[("relative", "1"), ("as", "geometry")],
    )?;
    end(writer, "mxCell")
}

/// Opens the `mxGraphModel` element with editor defaults.
///
/// The page grows past its default size when the layout does not fit,
/// keeping the layout's left and top margins on the far side as well.
fn write_graph_model_start(writer: &mut XmlWriter, layout: &Layout) -> Result<(), Error> {
    let default_page = Size::new(PAGE_WIDTH, PAGE_HEIGHT);
    let page = layout.bounds().map_or(default_page, |bounds| {
        default_page.max(Size::new(
            (bounds.max_x() + bounds.min_x().max(0.0)).ceil(),
            (bounds.max_y() + bounds.min_y().max(0.0)).ceil(),
        ))
    });
    let page_width = page.width().to_string();
    let page_height = page.height().to_string();

    start(
        writer,
        "mxGraphModel",
        &[
            ("dx", "1000"),
            ("dy", "800"),
            ("grid", "1"),
            ("gridSize", "10"),
            ("guides", "1"),
            ("tooltips", "1"),
            ("connect", "1"),
            ("arrows", "1"),
            ("fold", "1"),
            ("page", "1"),
            ("pageScale", "1"),
            ("pageWidth", page_width.as_str()),
            ("pageHeight", page_height.as_str()),
            ("math", "0"),
            ("shadow", "0"),
        ],
    )
}
