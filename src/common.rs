//!
//! Common definitions: identifiers and weight vectors
//!
use itertools::Itertools;
use std::fmt;
use std::ops::{Add, AddAssign, Index};

///
/// Opaque vertex identifier.
///
/// Not interchangeable with raw integers or with `EdgeId`;
/// use `VertexId::new` / `From<u64>` to build one and `get` to unwrap it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        VertexId(id)
    }
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Opaque edge identifier.
///
/// Assigned sequentially from 0 in blueprint order when a graph is built.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn new(index: usize) -> Self {
        EdgeId(index)
    }
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Weight vector of an edge.
///
/// The dimension `D` (number of independent cost components) is fixed per graph.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight<const D: usize>([f64; D]);

impl<const D: usize> Weight<D> {
    pub fn new(components: [f64; D]) -> Self {
        Weight(components)
    }
    pub fn dimension(&self) -> usize {
        D
    }
    pub fn components(&self) -> &[f64; D] {
        &self.0
    }
}

impl Weight<1> {
    /// the single component of a scalar weight
    pub fn scalar(&self) -> f64 {
        self.0[0]
    }
}

impl<const D: usize> From<[f64; D]> for Weight<D> {
    fn from(components: [f64; D]) -> Self {
        Weight(components)
    }
}

impl<const D: usize> Index<usize> for Weight<D> {
    type Output = f64;
    fn index(&self, dimension: usize) -> &f64 {
        &self.0[dimension]
    }
}

impl<const D: usize> AddAssign for Weight<D> {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a += b;
        }
    }
}

impl<const D: usize> Add for Weight<D> {
    type Output = Weight<D>;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<const D: usize> fmt::Display for Weight<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(","))
    }
}

///
/// short-hand of `VertexId::new`
///
pub fn vi(id: u64) -> VertexId {
    VertexId::new(id)
}

///
/// short-hand of `EdgeId::new`
///
pub fn ei(index: usize) -> EdgeId {
    EdgeId::new(index)
}

//
// tests
//
