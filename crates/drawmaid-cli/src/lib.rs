//! Drawmaid CLI library
//!
//! This module contains the core CLI logic for the drawmaid converter.

pub mod error_adapter;

mod args;
mod config;
mod input;

pub use args::Args;
pub use input::InputError;

use log::{info, warn};

use drawmaid::{DiagramBuilder, DrawmaidError, diagnostics::Diagnostic};

use error_adapter::WarningReport;

/// Run the drawmaid CLI application
///
/// Reads the flowchart named by `args`, converts it and writes the draw.io
/// document to the output path. Skipped statements are reported as warnings
/// and do not fail the run.
///
/// # Errors
///
/// Returns `DrawmaidError` for:
/// - Missing, conflicting, unreadable or empty input
/// - Configuration loading errors
/// - Layout errors
/// - Export and write errors
pub fn run(args: &Args) -> Result<(), DrawmaidError> {
    info!(output_path = args.output.as_str(); "Processing flowchart");

    let app_config = config::load_config(args.config.as_ref())?;
    let source = input::read_source(args)?;

    let builder = DiagramBuilder::new(app_config);
    let output = builder.parse(&source);
    report_diagnostics(output.diagnostics(), &source);

    builder.write_drawio(output.diagram(), &args.output)?;

    info!(
        output_file = args.output.as_str(),
        nodes = output.diagram().node_count(),
        edges = output.diagram().edges().len();
        "draw.io document exported successfully"
    );

    Ok(())
}

fn report_diagnostics(diagnostics: &[Diagnostic], source: &str) {
    for diagnostic in diagnostics {
        let report = WarningReport::new(diagnostic, source);
        warn!("{}", error_adapter::render(&report));
    }
}
