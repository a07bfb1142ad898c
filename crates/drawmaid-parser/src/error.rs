//! Diagnostics reported while parsing a flowchart.
//!
//! The parser never fails: statements it cannot use are skipped. Every skip,
//! and every declaration that loses to an earlier one, is recorded as a
//! [`Diagnostic`] so callers can show the user what was ignored.
//!
//! # Example
//!
//! ```
//! # use drawmaid_parser::error::{Diagnostic, ErrorCode};
//! # use drawmaid_parser::Span;
//!
//! let diag = Diagnostic::warning("node `A` is already declared")
//!     .with_code(ErrorCode::E300)
//!     .with_label(Span::new(20..26), "ignored declaration")
//!     .with_secondary_label(Span::new(0..8), "first declared here")
//!     .with_help("the first explicit declaration is kept");
//!
//! assert_eq!(diag.to_string(), "warning[E300]: node `A` is already declared");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
