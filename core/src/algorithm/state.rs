//! Transient search state for augmenting-path rounds
//!
//! The flow network's topology (vertices, edges, capacities) is permanent for
//! the lifetime of an engine. The data a single search round produces, the
//! discovered flags, the predecessor tree and the processed flags, lives here
//! instead and is wiped by [`SearchState::reset`] before every round.
//!
//! Predecessors are stored as arena indices, never as references, so the tree
//! can be rebuilt each round without touching ownership of the vertices.

use crate::algorithm::traits::{EdgeId, VertexId};

/// Predecessor link recorded when a vertex is discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predecessor {
    /// Vertex the search came from
    pub vertex: VertexId,
    /// Edge the search traversed to arrive
    pub edge: EdgeId,
}

/// Per-round search data indexed by vertex and edge arena position
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    discovered: Vec<bool>,
    parent: Vec<Option<Predecessor>>,
    processed: Vec<bool>,
    /// Edges visited during the current round
    edges_scanned: usize,
}

impl SearchState {
    /// Creates a cleared state sized for the given arenas
    pub fn new(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            discovered: vec![false; vertex_count],
            parent: vec![None; vertex_count],
            processed: vec![false; edge_count],
            edges_scanned: 0,
        }
    }

    /// Clears every flag and predecessor, resizing to the current arenas
    pub fn reset(&mut self, vertex_count: usize, edge_count: usize) {
        self.discovered.clear();
        self.discovered.resize(vertex_count, false);
        self.parent.clear();
        self.parent.resize(vertex_count, None);
        self.processed.clear();
        self.processed.resize(edge_count, false);
        self.edges_scanned = 0;
    }

    #[inline]
    pub fn is_discovered(&self, vertex: VertexId) -> bool {
        self.discovered.get(vertex.as_usize()).copied().unwrap_or(false)
    }

    pub fn discover(&mut self, vertex: VertexId) {
        if let Some(flag) = self.discovered.get_mut(vertex.as_usize()) {
            *flag = true;
        }
    }

    #[inline]
    pub fn parent(&self, vertex: VertexId) -> Option<Predecessor> {
        self.parent.get(vertex.as_usize()).copied().flatten()
    }

    pub fn set_parent(&mut self, vertex: VertexId, predecessor: Predecessor) {
        if let Some(slot) = self.parent.get_mut(vertex.as_usize()) {
            *slot = Some(predecessor);
        }
    }

    #[inline]
    pub fn is_processed(&self, edge: EdgeId) -> bool {
        self.processed.get(edge.as_usize()).copied().unwrap_or(false)
    }

    /// Marks an edge processed; returns false if it already was
    pub fn process(&mut self, edge: EdgeId) -> bool {
        match self.processed.get_mut(edge.as_usize()) {
            Some(flag) if !*flag => {
                *flag = true;
                self.edges_scanned += 1;
                true
            }
            _ => false,
        }
    }

    /// Vertices discovered in the current round, in arena order
    pub fn discovered_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.discovered
            .iter()
            .enumerate()
            .filter(|(_, discovered)| **discovered)
            .map(|(index, _)| VertexId(index))
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.iter().filter(|flag| **flag).count()
    }

    pub fn edges_scanned(&self) -> usize {
        self.edges_scanned
    }
}
