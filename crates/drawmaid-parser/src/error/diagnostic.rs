//! The core diagnostic type.
//!
//! A [`Diagnostic`] is a warning about input the parser skipped or
//! overrode, with an optional code, labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// warning[E200]: unrecognized statement `A ==> B`
///   ,-[input.mmd:3:5]
/// 3 |     A ==> B
///   :     ^^^^^^^ skipped
///   `----
///   help: supported forms are `A --> B`, `A --- B`, `A -- text --> B`, `id[label]`, `id(label)`, `id{label}` and `id`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use drawmaid_parser::error::Diagnostic;
    /// # use drawmaid_parser::Span;
    ///
    /// let diag = Diagnostic::warning("unrecognized statement")
    ///     .with_label(Span::new(0..7), "skipped");
    /// assert_eq!(diag.labels().len(), 1);
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "warning[E200]: message" or "warning: message"
        write!(f, "warning")?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_defaults() {
        let diag = Diagnostic::warning("skipped");

        assert_eq!(diag.message(), "skipped");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_builder_methods() {
        let diag = Diagnostic::warning("node `A` is already declared")
            .with_code(ErrorCode::E300)
            .with_label(Span::new(10..16), "ignored")
            .with_secondary_label(Span::new(0..4), "first declared here")
            .with_help("remove one of the declarations");

        assert_eq!(diag.code(), Some(ErrorCode::E300));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.help(), Some("remove one of the declarations"));
    }

    #[test]
    fn test_display_with_code() {
        let diag = Diagnostic::warning("unrecognized statement").with_code(ErrorCode::E200);
        assert_eq!(diag.to_string(), "warning[E200]: unrecognized statement");
    }

    #[test]
    fn test_display_without_code() {
        let diag = Diagnostic::warning("header ignored");
        assert_eq!(diag.to_string(), "warning: header ignored");
    }
}
