//! Diagnostic codes.
//!
//! Codes are organized by pipeline stage:
//! - `E1xx` - Statement splitting and header handling
//! - `E2xx` - Statement classification
//! - `E3xx` - Graph building

use std::fmt;

/// Codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Header Diagnostics (E1xx)
    // =========================================================================
    /// Unknown direction.
    ///
    /// The header keyword was followed by a token other than
    /// `TD`, `TB`, `LR`, `RL` or `BT`.
    E100,

    /// Misplaced header.
    ///
    /// A `graph`/`flowchart` header appeared after the first statement.
    E101,

    // =========================================================================
    // Classification Diagnostics (E2xx)
    // =========================================================================
    /// Unrecognized statement.
    ///
    /// The statement is neither an edge, a shaped node declaration nor a
    /// bare node reference.
    E200,

    // =========================================================================
    // Building Diagnostics (E3xx)
    // =========================================================================
    /// Conflicting node declaration.
    ///
    /// A node that was already explicitly declared was declared again with a
    /// different label or shape.
    E300,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E200").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E300 => "E300",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
