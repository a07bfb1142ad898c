//! Drawmaid Core Types and Definitions
//!
//! This crate provides the foundational types shared by the drawmaid
//! parser and renderer. It includes:
//!
//! - **Identifiers**: Efficient string-interned node identifiers ([`identifier::Id`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Semantic**: The flowchart model produced by the parser ([`semantic`] module)
//! - **Style**: draw.io cell style strings for shapes and edges ([`style`] module)

pub mod geometry;
pub mod identifier;
pub mod semantic;
pub mod style;
