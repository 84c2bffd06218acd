//!
//! Enumeration of all simple paths between two vertices
//!
//! Brute force depth-first search with backtracking. The number of paths is
//! exponential in the worst case, so this is meant for small graphs, e.g. as
//! an oracle for checking shortest path searches.
//!
//! <https://www.baeldung.com/cs/simple-paths-between-two-vertices>
//!
use crate::common::{VertexId, Weight};
use crate::error::{GraphError, Result};
use crate::graph::{Connection, Graph, ParallelEdges};
use crate::path::Path;
use fnv::FnvHashSet as HashSet;
use itertools::Itertools;

///
/// Enumerate all simple paths (no repeated vertex) from `start` to `end`.
///
/// Parallel edges of equal weight are treated as one edge.
///
pub fn find_all_paths<const D: usize>(
    graph: &Graph<D>,
    start: VertexId,
    end: VertexId,
) -> Result<Vec<Path<D>>> {
    find_all_paths_with(graph, start, end, ParallelEdges::Collapse)
}

///
/// Enumerate all simple paths from `start` to `end`, expanding neighbors
/// under the given parallel-edge policy.
///
/// Paths are returned in discovery order, each one once.
/// If `start == end` the only path is the empty one.
/// An `end` that is not in the graph is never reached, so no path is found.
///
pub fn find_all_paths_with<const D: usize>(
    graph: &Graph<D>,
    start: VertexId,
    end: VertexId,
    policy: ParallelEdges,
) -> Result<Vec<Path<D>>> {
    // reversed, so that pop() yields connections in edge order
    let pending = |vertex: VertexId| -> Result<Vec<Connection<D>>> {
        let mut connections = graph.find_neighbors_with(vertex, policy)?;
        connections.reverse();
        Ok(connections)
    };

    let mut paths: Vec<Path<D>> = Vec::new();
    let mut found: HashSet<Path<D>> = HashSet::default();
    let mut record = |hops: &[(VertexId, Option<Weight<D>>)]| -> Result<()> {
        let path = hops_to_path(graph, hops)?;
        if found.insert(path.clone()) {
            paths.push(path);
        }
        Ok(())
    };

    // current prefix: each vertex with the weight of the hop into it
    let mut hops: Vec<(VertexId, Option<Weight<D>>)> = vec![(start, None)];
    let mut visited: HashSet<VertexId> = HashSet::default();
    visited.insert(start);
    if start == end {
        // still fail on an unknown vertex
        pending(start)?;
        record(hops.as_slice())?;
        return Ok(paths);
    }
    let mut stack: Vec<Vec<Connection<D>>> = vec![pending(start)?];

    while let Some(next_connections) = stack.last_mut() {
        match next_connections.pop() {
            Some(connection) => {
                let next = connection.other_vertex;
                if visited.contains(&next) {
                    continue;
                }
                hops.push((next, Some(connection.weight)));
                if next == end {
                    // path found
                    record(hops.as_slice())?;
                    hops.pop();
                } else {
                    visited.insert(next);
                    stack.push(pending(next)?);
                }
            }
            None => {
                // all neighbors explored: backtrack
                stack.pop();
                if let Some((vertex, _)) = hops.pop() {
                    visited.remove(&vertex);
                }
            }
        }
    }

    tracing::debug!(%start, %end, paths = paths.len(), "all simple paths enumerated");
    Ok(paths)
}

///
/// Convert a walked vertex sequence (with hop weights) into a path of edges.
///
/// Fails with `NoPath` if two adjacent vertices are not joined by an edge of the recorded weight.
///
fn hops_to_path<const D: usize>(
    graph: &Graph<D>,
    hops: &[(VertexId, Option<Weight<D>>)],
) -> Result<Path<D>> {
    let edges = hops
        .iter()
        .tuple_windows()
        .map(|(&(v, _), &(w, weight))| {
            let edge = match weight {
                Some(weight) => graph.find_edge_with_weight(v, w, &weight),
                None => graph.find_edge(v, w),
            };
            edge.ok_or(GraphError::NoPath { from: v, to: w })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Path::new(edges))
}

//
// tests
//
