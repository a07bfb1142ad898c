//! miette rendering for parse warnings and fatal errors.
//!
//! Parse diagnostics never stop a conversion. They are rendered as warnings
//! with the offending source snippet. A [`DrawmaidError`] ends the run and is
//! rendered on its own, without a snippet.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity, SourceSpan,
};

use drawmaid::DrawmaidError;
use drawmaid_parser::{Span, error::Diagnostic};

/// A parse diagnostic paired with the source it points into.
pub struct WarningReport<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> WarningReport<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for WarningReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WarningReport").field(self.diag).finish()
    }
}

impl fmt::Display for WarningReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for WarningReport<'_> {}

impl MietteDiagnostic for WarningReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Warning)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = to_source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A fatal [`DrawmaidError`], tagged with a `drawmaid::*` code.
#[derive(Debug)]
pub struct ErrorReport<'a>(pub &'a DrawmaidError);

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for ErrorReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            DrawmaidError::Io(_) => "drawmaid::io",
            DrawmaidError::Layout(_) => "drawmaid::layout",
            DrawmaidError::Export(_) => "drawmaid::export",
        };
        Some(Box::new(code))
    }
}

/// Render a report with miette's graphical handler.
///
/// Falls back to the plain message if the handler fails.
pub fn render(report: &dyn MietteDiagnostic) -> String {
    let mut writer = String::new();
    match GraphicalReportHandler::new().render_report(&mut writer, report) {
        Ok(()) => writer,
        Err(_) => report.to_string(),
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}
