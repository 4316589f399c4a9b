//! Reusable discrete-mathematics structures.
//!
//! This crate re-exports the whole workspace surface:
//! - sets, relations, metrics and fields (`simplicia-core`)
//! - directed/labelled graphs, automata and grammars (`simplicia-graph`)
//! - simplicial complexes, graph products and the named-graph catalogue
//!   (`simplicia-complex`)

pub use simplicia_complex::*;
pub use simplicia_core::*;
pub use simplicia_graph::*;

pub use simplicia_complex::catalogue;
