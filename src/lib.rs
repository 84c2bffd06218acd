//!
//! Weighted undirected graph and path search
//!
//! # Graph
//!
//! * graph: immutable graph with `D`-dimensional edge weights
//! * path: path as a list of edges, and its total weight
//!
//! # Algorithms
//!
//! * dijkstra: textbook Dijkstra for scalar weights
//! * all_paths: all simple paths between two vertices
//!
//! # Wrappers
//!
//! * iterators
//!
pub mod all_paths;
pub mod common;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod iterators;
pub mod path;

pub use common::{EdgeId, VertexId, Weight};
pub use error::{GraphError, Result};
pub use graph::{Connection, Edge, EdgeBlueprint, Graph, ParallelEdges};
pub use path::Path;
