//!
//! Immutable weighted undirected graph
//!
//! Vertices are identified by `VertexId`, edges carry a `Weight<D>` whose
//! dimension `D` is fixed for the whole graph. Storage is a petgraph `UnGraph`
//! whose edge indices double as `EdgeId`s.
//!
use crate::common::{EdgeId, VertexId, Weight};
use crate::error::{GraphError, Result};
use crate::iterators::{EdgesIterator, IncidentEdges, VerticesIterator};
use fnv::FnvHashMap as HashMap;
use petgraph::graph::{EdgeIndex, EdgeReference, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

///
/// Edge descriptor supplied before ID assignment
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBlueprint<const D: usize> {
    pub vertex1: VertexId,
    pub vertex2: VertexId,
    pub weight: Weight<D>,
}

impl<const D: usize> EdgeBlueprint<D> {
    pub fn new(vertex1: VertexId, vertex2: VertexId, weight: [f64; D]) -> Self {
        EdgeBlueprint {
            vertex1,
            vertex2,
            weight: Weight::new(weight),
        }
    }
}

///
/// Undirected edge. `(vertex1, vertex2)` keeps the orientation of its blueprint.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<const D: usize> {
    pub id: EdgeId,
    pub vertex1: VertexId,
    pub vertex2: VertexId,
    pub weight: Weight<D>,
}

impl<const D: usize> Edge<D> {
    pub(crate) fn from_reference(
        graph: &UnGraph<VertexId, Weight<D>>,
        er: EdgeReference<'_, Weight<D>>,
    ) -> Self {
        Edge {
            id: EdgeId::new(er.id().index()),
            vertex1: graph[er.source()],
            vertex2: graph[er.target()],
            weight: *er.weight(),
        }
    }
    ///
    /// true if the edge joins `v` and `w` in either direction
    ///
    pub fn connects(&self, v: VertexId, w: VertexId) -> bool {
        (self.vertex1 == v && self.vertex2 == w) || (self.vertex1 == w && self.vertex2 == v)
    }
    ///
    /// The endpoint opposite to `vertex`, or None if the edge is not incident to it.
    ///
    pub fn other_end(&self, vertex: VertexId) -> Option<VertexId> {
        if self.vertex1 == vertex {
            Some(self.vertex2)
        } else if self.vertex2 == vertex {
            Some(self.vertex1)
        } else {
            None
        }
    }
}

///
/// One-sided view of an edge from one of its endpoints
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection<const D: usize> {
    pub other_vertex: VertexId,
    pub weight: Weight<D>,
}

///
/// How `find_neighbors_with` treats parallel edges
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelEdges {
    /// parallel edges with equal weight to the same neighbor become one connection
    #[default]
    Collapse,
    /// one connection per incident edge
    Preserve,
}

///
/// Immutable graph with `D`-dimensional edge weights
///
#[derive(Debug, Clone)]
pub struct Graph<const D: usize> {
    graph: UnGraph<VertexId, Weight<D>>,
    index: HashMap<VertexId, NodeIndex>,
}

impl<const D: usize> Graph<D> {
    ///
    /// Build a graph from a vertex list and edge blueprints.
    ///
    /// Every endpoint of every blueprint is checked before any edge is created.
    /// Edge `i` gets `EdgeId(i)`. Parallel edges are kept; a repeated vertex id
    /// keeps its first position.
    ///
    pub fn new<V, B>(vertices: V, blueprints: B) -> Result<Self>
    where
        V: IntoIterator<Item = VertexId>,
        B: IntoIterator<Item = EdgeBlueprint<D>>,
    {
        let vertices: Vec<VertexId> = vertices.into_iter().collect();
        let blueprints: Vec<EdgeBlueprint<D>> = blueprints.into_iter().collect();

        // consistency check
        for blueprint in blueprints.iter() {
            for vertex in [blueprint.vertex1, blueprint.vertex2] {
                if !vertices.contains(&vertex) {
                    return Err(GraphError::Construction(vertex));
                }
            }
        }

        let mut graph = UnGraph::with_capacity(vertices.len(), blueprints.len());
        let mut index = HashMap::default();
        for &vertex in vertices.iter() {
            index
                .entry(vertex)
                .or_insert_with(|| graph.add_node(vertex));
        }
        for blueprint in blueprints.iter() {
            // both endpoints were checked above
            let (Some(&v), Some(&w)) = (index.get(&blueprint.vertex1), index.get(&blueprint.vertex2))
            else {
                return Err(GraphError::Construction(blueprint.vertex1));
            };
            graph.add_edge(v, w, blueprint.weight);
        }

        tracing::debug!(
            vertices = graph.node_count(),
            edges = graph.edge_count(),
            dimension = D,
            "graph constructed"
        );
        Ok(Graph { graph, index })
    }

    /// weight dimension shared by every edge
    pub fn dimension(&self) -> usize {
        D
    }
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.index.contains_key(&vertex)
    }
    ///
    /// Vertices in stored order
    ///
    pub fn vertices(&self) -> VerticesIterator<'_> {
        VerticesIterator::new(&self.graph)
    }
    ///
    /// Edges in stored (= `EdgeId`) order
    ///
    pub fn edges(&self) -> EdgesIterator<'_, D> {
        EdgesIterator::new(&self.graph)
    }
    pub fn edge(&self, id: EdgeId) -> Option<Edge<D>> {
        let e = EdgeIndex::new(id.index());
        self.graph
            .edge_endpoints(e)
            .zip(self.graph.edge_weight(e))
            .map(|((v, w), &weight)| Edge {
                id,
                vertex1: self.graph[v],
                vertex2: self.graph[w],
                weight,
            })
    }

    ///
    /// First edge (in stored order) joining `vertex1` and `vertex2`, in either direction.
    ///
    /// Absence is not an error.
    ///
    pub fn find_edge(&self, vertex1: VertexId, vertex2: VertexId) -> Option<Edge<D>> {
        self.edges().find(|edge| edge.connects(vertex1, vertex2))
    }

    ///
    /// First edge (in stored order) joining `vertex1` and `vertex2` whose weight equals `weight`.
    ///
    /// Used to map a traversed hop back to its edge when parallel edges differ in weight.
    ///
    pub fn find_edge_with_weight(
        &self,
        vertex1: VertexId,
        vertex2: VertexId,
        weight: &Weight<D>,
    ) -> Option<Edge<D>> {
        self.edges()
            .find(|edge| edge.connects(vertex1, vertex2) && edge.weight == *weight)
    }

    ///
    /// Neighbors of `vertex` as connections, collapsing duplicates by value.
    ///
    pub fn find_neighbors(&self, vertex: VertexId) -> Result<Vec<Connection<D>>> {
        self.find_neighbors_with(vertex, ParallelEdges::Collapse)
    }

    ///
    /// Neighbors of `vertex` as connections, in edge order, under the given
    /// parallel-edge policy.
    ///
    pub fn find_neighbors_with(
        &self,
        vertex: VertexId,
        policy: ParallelEdges,
    ) -> Result<Vec<Connection<D>>> {
        if !self.contains_vertex(vertex) {
            return Err(GraphError::Lookup(vertex));
        }
        let mut neighbors: Vec<Connection<D>> = Vec::new();
        for connection in IncidentEdges::new(&self.graph, vertex) {
            match policy {
                ParallelEdges::Collapse if neighbors.contains(&connection) => {}
                _ => neighbors.push(connection),
            }
        }
        Ok(neighbors)
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ei, vi};

    fn triangle() -> Graph<1> {
        Graph::new(
            [vi(1), vi(2), vi(3)],
            [
                EdgeBlueprint::new(vi(1), vi(2), [4.0]),
                EdgeBlueprint::new(vi(2), vi(3), [5.0]),
                EdgeBlueprint::new(vi(3), vi(1), [6.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn construction() {
        let g: Graph<1> = Graph::new(
            [vi(3), vi(4)],
            [EdgeBlueprint::new(vi(3), vi(4), [5.0])],
        )
        .unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.dimension(), 1);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![vi(3), vi(4)]);
    }

    #[test]
    fn edge_ids_follow_blueprint_order() {
        let g = triangle();
        for (i, edge) in g.edges().enumerate() {
            assert_eq!(edge.id, ei(i));
            assert_eq!(g.edge(ei(i)), Some(edge));
        }
        let e = g.edge(ei(2)).unwrap();
        assert_eq!((e.vertex1, e.vertex2), (vi(3), vi(1)));
        assert_eq!(g.edge(ei(3)), None);
    }

    #[test]
    fn unknown_vertex_in_blueprint() {
        let r: Result<Graph<1>> = Graph::new(
            [vi(1), vi(2)],
            [
                EdgeBlueprint::new(vi(1), vi(2), [1.0]),
                EdgeBlueprint::new(vi(2), vi(9), [1.0]),
            ],
        );
        assert_eq!(r.unwrap_err(), GraphError::Construction(vi(9)));

        let r: Result<Graph<1>> = Graph::new([vi(1)], [EdgeBlueprint::new(vi(8), vi(9), [1.0])]);
        assert_eq!(r.unwrap_err(), GraphError::Construction(vi(8)));
    }

    #[test]
    fn empty_graph() {
        let g: Graph<2> = Graph::new(Vec::new(), Vec::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.dimension(), 2);
        assert_eq!(g.find_edge(vi(0), vi(1)), None);
    }

    #[test]
    fn duplicate_vertex_keeps_first_position() {
        let g: Graph<1> = Graph::new(
            [vi(5), vi(6), vi(5)],
            [EdgeBlueprint::new(vi(5), vi(6), [1.0])],
        )
        .unwrap();
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![vi(5), vi(6)]);
    }

    #[test]
    fn find_edge_is_direction_insensitive() {
        let g = triangle();
        let vs: Vec<_> = g.vertices().collect();
        for &a in vs.iter() {
            for &b in vs.iter() {
                assert_eq!(g.find_edge(a, b), g.find_edge(b, a));
            }
        }
        assert_eq!(g.find_edge(vi(1), vi(3)).unwrap().id, ei(2));
        assert_eq!(g.find_edge(vi(1), vi(1)), None);
        assert_eq!(g.find_edge(vi(1), vi(42)), None);
    }

    #[test]
    fn find_edge_returns_first_parallel_edge() {
        let g: Graph<1> = Graph::new(
            [vi(1), vi(2)],
            [
                EdgeBlueprint::new(vi(1), vi(2), [1000.0]),
                EdgeBlueprint::new(vi(2), vi(1), [3.0]),
            ],
        )
        .unwrap();
        assert_eq!(g.find_edge(vi(2), vi(1)).unwrap().id, ei(0));
        let cheap = g
            .find_edge_with_weight(vi(1), vi(2), &Weight::new([3.0]))
            .unwrap();
        assert_eq!(cheap.id, ei(1));
        assert_eq!(
            g.find_edge_with_weight(vi(1), vi(2), &Weight::new([7.0])),
            None
        );
    }

    #[test]
    fn neighbors() {
        let g = triangle();
        let n = g.find_neighbors(vi(2)).unwrap();
        assert_eq!(
            n,
            vec![
                Connection {
                    other_vertex: vi(1),
                    weight: Weight::new([4.0])
                },
                Connection {
                    other_vertex: vi(3),
                    weight: Weight::new([5.0])
                },
            ]
        );
        assert_eq!(g.find_neighbors(vi(9)), Err(GraphError::Lookup(vi(9))));
    }

    #[test]
    fn neighbors_parallel_edge_policy() {
        let g: Graph<1> = Graph::new(
            [vi(1), vi(2), vi(3)],
            [
                EdgeBlueprint::new(vi(1), vi(2), [1.0]),
                EdgeBlueprint::new(vi(2), vi(1), [1.0]),
                EdgeBlueprint::new(vi(1), vi(2), [2.0]),
            ],
        )
        .unwrap();
        let collapsed = g.find_neighbors(vi(1)).unwrap();
        println!("{:?}", collapsed);
        assert_eq!(collapsed.len(), 2);
        let preserved = g.find_neighbors_with(vi(1), ParallelEdges::Preserve).unwrap();
        assert_eq!(preserved.len(), 3);
        assert!(g.find_neighbors(vi(3)).unwrap().is_empty());
    }

    #[test]
    fn self_loop_is_its_own_neighbor() {
        let g: Graph<1> = Graph::new([vi(1)], [EdgeBlueprint::new(vi(1), vi(1), [2.0])]).unwrap();
        let n = g.find_neighbors(vi(1)).unwrap();
        assert_eq!(n.len(), 1);
        assert_eq!(n[0].other_vertex, vi(1));
    }
}
