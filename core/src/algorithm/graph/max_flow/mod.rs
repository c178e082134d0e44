//! Maximum flow and minimum cut over capacitated flow networks
//!
//! This module implements the augmenting-path family of maximum flow
//! algorithms (Ford-Fulkerson with depth-first search, Edmonds-Karp with
//! breadth-first search) over a residual graph built once from a
//! [`Graph`](crate::data_structures::graph::Graph) snapshot.
//!
//! # Structure
//! - [`network`]: vertex and edge arenas, residual twins, result snapshots
//! - [`search`]: one augmenting-path search round from the source
//! - [`path`]: bottleneck volume and augmentation along the predecessor tree
//! - [`solver`]: the round loop and the [`Algorithm`](crate::algorithm::Algorithm) facade
//! - [`cut`]: cut capacity, the greedy cut heuristic and the reachable cut
//!
//! # Termination
//! With non-negative integer capacities every augmenting round raises the flow
//! value by at least one, so the loop ends after at most `max_flow` rounds.
//! Breadth-first search additionally bounds the round count by `O(V * E)`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod cut;
pub mod network;
pub mod path;
pub mod search;
pub mod solver;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::EdgeId;
use crate::data_structures::graph::Graph;

pub use self::network::{DuplicateNamePolicy, FlowEdge, FlowNetwork, FlowVertex, NetworkConfig};
pub use self::search::SearchOrder;
pub use self::solver::{MaxFlowConfig, MaxFlowSolver};

/// Edge capacity type (non-negative integers)
pub type Capacity = i64;

/// Flow value type; signed so residual twins can carry negative flow
pub type Flow = i64;

/// Flow engine errors
///
/// Configuration errors describe unusable input and are reported at
/// construction. Invariant violations indicate a broken predecessor tree or
/// edge pairing and are never expected under correct use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Unknown vertex `{0}`")]
    UnknownVertex(String),

    #[error("Edge #{index} references unknown vertex `{name}`")]
    UnknownEndpoint { index: usize, name: String },

    #[error("Duplicate vertex name `{0}`")]
    DuplicateVertex(String),

    #[error("Edge #{index} has invalid capacity {weight:?}")]
    InvalidCapacity { index: usize, weight: Option<Capacity> },

    #[error("Predecessor chain from sink does not reach source")]
    BrokenPredecessorChain,

    #[error("No edge from `{from}` to `{to}` on augmenting path")]
    MissingEdge { from: String, to: String },

    #[error("Edge {0} has no residual twin")]
    MissingTwin(EdgeId),
}

impl FlowError {
    /// True for defects in the search/augmentation pairing, false for bad input
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            FlowError::BrokenPredecessorChain
                | FlowError::MissingEdge { .. }
                | FlowError::MissingTwin(_)
        )
    }
}

/// Maximum flow result with residual and flow snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlowResult {
    /// Maximum flow value leaving the source
    pub max_flow: Flow,
    /// Converged residual graph: every edge and twin, weight = residual
    pub residual_graph: Graph,
    /// Flow assignment: original edges only, weight = net flow
    pub flow_graph: Graph,
    /// Greedy cut over the converged residuals
    pub min_cut: Vec<String>,
    /// Algorithm performance metrics
    pub metrics: FlowMetrics,
}

/// Flow algorithm performance metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowMetrics {
    /// Number of search rounds, including the final unsuccessful one
    pub searches: usize,
    /// Number of augmentations applied
    pub augmentations: usize,
    /// Bottleneck volume of each augmentation, in order
    pub path_volumes: Vec<Capacity>,
    /// Edges processed across all searches
    pub edges_scanned: usize,
    /// Vertices discovered across all searches
    pub vertices_discovered: usize,
    /// Algorithm execution time
    pub execution_time_ms: f64,
}
