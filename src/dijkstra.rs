//!
//! Textbook Dijkstra for graphs with scalar (1-dimensional) weights
//!
//! Dense O(V^2) version: the next vertex is chosen by a linear scan over
//! all unvisited vertices, no priority queue.
//!
//! <https://en.wikipedia.org/wiki/Dijkstra's_algorithm#Pseudocode>
//!
use crate::common::{VertexId, Weight};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::path::Path;
use fnv::FnvHashMap as HashMap;

///
/// The last hop of a tentative shortest path: `previous --weight--> vertex`
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    pub previous: VertexId,
    pub weight: Weight<1>,
}

///
/// Distances and predecessors from the source vertex to every vertex
///
/// The source is the first vertex in the graph's stored order.
///
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    /// vertices in stored order; `distances` and `predecessors` are indexed alike
    vertices: Vec<VertexId>,
    position: HashMap<VertexId, usize>,
    distances: Vec<f64>,
    predecessors: Vec<Option<Hop>>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }
    ///
    /// Tentative distance after the search finished.
    /// `f64::INFINITY` for a vertex unreachable from the source.
    ///
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.position.get(&vertex).map(|&i| self.distances[i])
    }
    pub fn predecessor(&self, vertex: VertexId) -> Option<Hop> {
        self.position
            .get(&vertex)
            .and_then(|&i| self.predecessors[i])
    }
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    ///
    /// Traceback a path from `start` to `end` by following predecessors backward from `end`.
    ///
    /// Fails with `NoPath` if the chain ends before reaching `start`.
    ///
    pub fn traceback(&self, graph: &Graph<1>, start: VertexId, end: VertexId) -> Result<Path<1>> {
        let no_path = GraphError::NoPath {
            from: start,
            to: end,
        };
        let mut edges = Vec::new();
        let mut node = end;
        while node != start {
            let hop = self.predecessor(node).ok_or_else(|| no_path.clone())?;
            let edge = graph
                .find_edge_with_weight(hop.previous, node, &hop.weight)
                .ok_or_else(|| no_path.clone())?;
            edges.push(edge);
            node = hop.previous;
        }
        edges.reverse();
        Ok(Path::new(edges))
    }
}

///
/// Compute tentative distances from the first stored vertex to all vertices.
///
pub fn shortest_paths(graph: &Graph<1>) -> Result<ShortestPaths> {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    let source = *vertices.first().ok_or(GraphError::EmptyGraph)?;
    let n = vertices.len();
    let position: HashMap<VertexId, usize> =
        vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    // (1) init
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<Hop>> = vec![None; n];
    let mut visited = vec![false; n];
    distances[0] = 0.0;

    // (2) pick the nearest unvisited vertex (first in stored order on ties) and relax
    while let Some(current) = (0..n)
        .filter(|&i| !visited[i])
        .min_by(|&i, &j| distances[i].total_cmp(&distances[j]))
    {
        for connection in graph.find_neighbors(vertices[current])? {
            let Some(&j) = position.get(&connection.other_vertex) else {
                continue;
            };
            if visited[j] {
                continue;
            }
            let distance = distances[current] + connection.weight.scalar();
            if distance < distances[j] {
                tracing::trace!(
                    current = %vertices[current],
                    neighbor = %vertices[j],
                    before = distances[j],
                    after = distance,
                    "relaxed"
                );
                distances[j] = distance;
                predecessors[j] = Some(Hop {
                    previous: vertices[current],
                    weight: connection.weight,
                });
            }
        }
        visited[current] = true;
    }

    Ok(ShortestPaths {
        source,
        vertices,
        position,
        distances,
        predecessors,
    })
}

///
/// Find one shortest path from `start` to `end`.
///
/// Distances are computed from the first stored vertex of the graph, and the
/// path is recovered by walking predecessors back from `end` to `start`.
/// Among several minimum-weight paths, which one is returned is unspecified.
///
pub fn textbook_dijkstra(graph: &Graph<1>, start: VertexId, end: VertexId) -> Result<Path<1>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    for vertex in [start, end] {
        if !graph.contains_vertex(vertex) {
            return Err(GraphError::Lookup(vertex));
        }
    }

    let paths = shortest_paths(graph)?;
    let path = paths.traceback(graph, start, end)?;
    tracing::debug!(%start, %end, path = %path, "shortest path found");
    Ok(path)
}

//
// tests
//
