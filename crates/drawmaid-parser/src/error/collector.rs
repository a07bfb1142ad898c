//! Collector for accumulating diagnostics across parsing stages.

use log::debug;

use crate::error::Diagnostic;

/// Accumulates diagnostics from the normalizer, classifier, and builder.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        debug!(
            code:? = diagnostic.code(),
            message = diagnostic.message();
            "Diagnostic emitted"
        );
        self.diagnostics.push(diagnostic);
    }

    /// Returns the number of diagnostics emitted so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Finish collection and return the diagnostics in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
