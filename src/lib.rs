//! disasmview — terminal viewer for disassembly listings.
//!
//! Renders chunks as rows: address column, styled instruction text,
//! trailing comment. Expanded chunks bracket their body with `name::kind {`
//! and `}` markers; double-clicking a row collapses or expands it.

pub mod config;
pub mod model;
pub mod tui;
