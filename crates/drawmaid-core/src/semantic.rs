//! Semantic flowchart model.
//!
//! This module contains the graph model produced by the parser and consumed by
//! the layout engine and document emitter.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ normalize
//! Statements (with spans)
//!     ↓ classify
//! Node / Edge statements
//!     ↓ build
//! Semantic Model (these types)
//!     ↓ layout
//! Node positions
//!     ↓ export
//! draw.io document
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - The [`Diagram`] container and its [`Direction`]
//! - [`element`] - Diagram elements: [`Node`], [`Edge`], [`Shape`], [`EdgeStyle`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
