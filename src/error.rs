//!
//! Errors raised by graph construction, queries and path search
//!
use crate::common::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

///
/// Every failure is terminal for the call that raised it.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// an edge blueprint references a vertex absent from the vertex list
    #[error("vertex {0} is not in the provided list of vertices")]
    Construction(VertexId),

    /// a query references a vertex that is not in the graph
    #[error("vertex {0} not found in graph")]
    Lookup(VertexId),

    #[error("graph has no vertices")]
    EmptyGraph,

    /// no predecessor chain (or no edge) connects the two vertices
    #[error("no path from vertex {from} to vertex {to}")]
    NoPath { from: VertexId, to: VertexId },

    /// the weight of a zero-edge path has no recoverable dimension
    #[error("path has no edges")]
    EmptyPath,
}
