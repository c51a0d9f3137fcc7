//! Text renderers for a finished tree.
//!
//! - tree: indented outline, one node per line
//! - dot: Graphviz `digraph` source; turning it into an image is left to
//!   the `dot` tool

pub mod dot;
pub mod tree;
