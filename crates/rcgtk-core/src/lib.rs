//! rcgtk Core Types and Definitions
//!
//! This crate provides the foundational types shared by the rcgtk parser and
//! translator. It includes:
//!
//! - **Geometry**: Source rectangles and grid cells ([`geometry`] module)
//! - **Grid**: The dialog-unit to grid-cell mapping ([`grid::GridMapper`])
//! - **Style**: `|`-joined style flag lists ([`style::StyleFlags`])
//! - **Symbols**: The resolved identifier table ([`symbol::SymbolTable`])
//! - **Semantic**: Typed control records for dialog elements ([`semantic`] module)

pub mod geometry;
pub mod grid;
pub mod semantic;
pub mod style;
pub mod symbol;
