//!
//! Wrapper of petgraph::Graph iterators
//!
//! * vertices()
//! * edges()
//! * incident edges of a vertex
//!
use crate::common::{VertexId, Weight};
use crate::graph::{Connection, Edge};
use petgraph::graph::{EdgeReferences, NodeReferences, UnGraph};
use petgraph::visit::IntoNodeReferences;

///
/// Iterator struct for `vertices()`
///
/// implements Iterator whose item is `VertexId`, in stored order
///
/// wrapper of UnGraph::node_references()
///
pub struct VerticesIterator<'a> {
    nodes: NodeReferences<'a, VertexId>,
}

impl<'a> VerticesIterator<'a> {
    ///
    /// Create VerticesIterator from UnGraph
    ///
    pub fn new<const D: usize>(graph: &'a UnGraph<VertexId, Weight<D>>) -> Self {
        VerticesIterator {
            nodes: graph.node_references(),
        }
    }
}

impl<'a> Iterator for VerticesIterator<'a> {
    type Item = VertexId;
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|(_, &vertex)| vertex)
    }
}

///
/// Iterator struct for `edges()`
///
/// implements Iterator whose item is `Edge<D>`, in ascending `EdgeId` order
///
/// wrapper of UnGraph::edge_references()
///
pub struct EdgesIterator<'a, const D: usize> {
    graph: &'a UnGraph<VertexId, Weight<D>>,
    edges: EdgeReferences<'a, Weight<D>>,
}

impl<'a, const D: usize> EdgesIterator<'a, D> {
    ///
    /// Create EdgesIterator from the reference of UnGraph
    ///
    pub fn new(graph: &'a UnGraph<VertexId, Weight<D>>) -> Self {
        EdgesIterator {
            graph,
            edges: graph.edge_references(),
        }
    }
}

impl<'a, const D: usize> Iterator for EdgesIterator<'a, D> {
    type Item = Edge<D>;
    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.edges.next().map(|er| Edge::from_reference(graph, er))
    }
}

///
/// Iterator for edges incident to a vertex
///
/// implements Iterator whose item is `Connection<D>`,
/// the edge seen from the given vertex.
///
/// Scans all edges in stored order, so parallel edges come out in `EdgeId` order.
///
pub struct IncidentEdges<'a, const D: usize> {
    vertex: VertexId,
    edges: EdgesIterator<'a, D>,
}

impl<'a, const D: usize> IncidentEdges<'a, D> {
    ///
    /// Create IncidentEdges from the reference of UnGraph
    ///
    pub fn new(graph: &'a UnGraph<VertexId, Weight<D>>, vertex: VertexId) -> Self {
        IncidentEdges {
            vertex,
            edges: EdgesIterator::new(graph),
        }
    }
}

impl<'a, const D: usize> Iterator for IncidentEdges<'a, D> {
    type Item = Connection<D>;
    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.vertex;
        self.edges.find_map(|edge| {
            edge.other_end(vertex).map(|other_vertex| Connection {
                other_vertex,
                weight: edge.weight,
            })
        })
    }
}
