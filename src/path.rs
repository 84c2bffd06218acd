//!
//! Path in graph and its total weight
//!
use crate::common::{EdgeId, VertexId, Weight};
use crate::error::{GraphError, Result};
use crate::graph::Edge;
use fnv::FnvHashSet as HashSet;
use itertools::Itertools;
use std::hash::{Hash, Hasher};

///
/// Path (as a list of edges, in traversal order)
///
/// Equality and hashing only look at the edge ids.
///
#[derive(Debug, Clone)]
pub struct Path<const D: usize>(Vec<Edge<D>>);

//
// Path
//
impl<const D: usize> std::fmt::Display for Path<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|e| e.id).join(","))
    }
}

impl<const D: usize> PartialEq for Path<D> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_ids().eq(other.edge_ids())
    }
}

impl<const D: usize> Eq for Path<D> {}

impl<const D: usize> Hash for Path<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for id in self.edge_ids() {
            id.hash(state);
        }
    }
}

impl<const D: usize> Path<D> {
    /// constructor from vec of edges
    pub fn new(edges: Vec<Edge<D>>) -> Path<D> {
        Path(edges)
    }
    pub fn edges(&self) -> &[Edge<D>] {
        &self.0
    }
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.0.iter().map(|e| e.id)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn total_weight(&self) -> Result<Weight<D>> {
        total_weight(self)
    }
    ///
    /// Convert the edge list into the list of vertices visited when walking it from `start`.
    ///
    /// Returns None if consecutive edges do not share the expected endpoint.
    ///
    pub fn vertices(&self, start: VertexId) -> Option<Vec<VertexId>> {
        let mut nodes = vec![start];
        let mut current = start;
        for edge in self.0.iter() {
            current = edge.other_end(current)?;
            nodes.push(current);
        }
        Some(nodes)
    }
    ///
    /// determine if the path walked from `start` is a walk visiting no vertex twice
    ///
    pub fn is_simple(&self, start: VertexId) -> bool {
        match self.vertices(start) {
            Some(nodes) => {
                let mut used: HashSet<VertexId> = HashSet::default();
                nodes.into_iter().all(|node| used.insert(node))
            }
            None => false,
        }
    }
}

///
/// Calculate total weight of path by elementwise sum of edge weights
///
/// An empty path has no edge to take the dimension from, so it is an error.
///
pub fn total_weight<const D: usize>(path: &Path<D>) -> Result<Weight<D>> {
    let (first, rest) = path.edges().split_first().ok_or(GraphError::EmptyPath)?;
    Ok(rest.iter().fold(first.weight, |total, edge| total + edge.weight))
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ei, vi};
    use crate::graph::{EdgeBlueprint, Graph};

    fn line() -> Graph<2> {
        Graph::new(
            [vi(1), vi(2), vi(3)],
            [
                EdgeBlueprint::new(vi(1), vi(2), [4.0, 1.0]),
                EdgeBlueprint::new(vi(3), vi(2), [5.0, 2.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn total_weight_is_elementwise_sum() {
        let g = line();
        let path = Path::new(g.edges().collect());
        assert_eq!(total_weight(&path).unwrap(), Weight::new([9.0, 3.0]));
        // edges are untouched
        assert_eq!(path.edges()[0].weight, Weight::new([4.0, 1.0]));
        assert_eq!(path.total_weight().unwrap(), Weight::new([9.0, 3.0]));
    }

    #[test]
    fn total_weight_of_empty_path() {
        let path: Path<1> = Path::new(vec![]);
        assert_eq!(total_weight(&path), Err(GraphError::EmptyPath));
    }

    #[test]
    fn path_vertices() {
        let g = line();
        let path = Path::new(g.edges().collect());
        println!("{}", path);
        assert_eq!(path.to_string(), "0,1");
        assert_eq!(path.vertices(vi(1)), Some(vec![vi(1), vi(2), vi(3)]));
        assert_eq!(path.vertices(vi(3)), None);
        assert!(path.is_simple(vi(1)));

        let back_and_forth = Path::new(vec![g.edge(ei(0)).unwrap(), g.edge(ei(0)).unwrap()]);
        assert_eq!(back_and_forth.vertices(vi(1)), Some(vec![vi(1), vi(2), vi(1)]));
        assert!(!back_and_forth.is_simple(vi(1)));
    }

    #[test]
    fn path_equality_by_edge_ids() {
        let g = line();
        let a = Path::new(vec![g.edge(ei(0)).unwrap()]);
        let b = Path::new(vec![g.find_edge(vi(2), vi(1)).unwrap()]);
        let c = Path::new(vec![g.edge(ei(1)).unwrap()]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
