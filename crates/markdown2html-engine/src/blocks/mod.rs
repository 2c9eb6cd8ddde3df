//! # Block Accumulation
//!
//! Phase 2 of conversion: a [`HtmlBuilder`] consumes translated lines in
//! order and brackets list items with `<ul>`/`<ol>` wrappers.
//!
//! ## Key Invariants
//!
//! - At most one list block is open at any point in the output
//! - An open block is closed before a different list kind opens, before any
//!   non-list line, and at end of input
//! - Blank lines become `<p>`

pub mod builder;

pub use builder::{HtmlBuilder, OpenBlock};
