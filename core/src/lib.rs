//! FLOWNET core: maximum flow and minimum cut on labeled flow networks
//!
//! A [`Graph`] snapshot of named nodes and weighted edges is turned into a
//! [`FlowNetwork`] between a source and a sink. [`MaxFlowSolver`] pushes flow
//! along augmenting paths of the residual graph until none remains and
//! reports the converged residual graph, the flow assignment and a cut.
//!
//! ```
//! use flownet_core::{Edge, FlowNetwork, Graph};
//!
//! let mut graph = Graph::new(true);
//! graph
//!     .add_node("s", 0)
//!     .add_node("a", 0)
//!     .add_node("t", 0)
//!     .add_edge(Edge::directed("s", "a", "sa", 2))
//!     .add_edge(Edge::directed("a", "t", "at", 5))
//!     .add_edge(Edge::directed("s", "t", "st", 1));
//!
//! let mut network = FlowNetwork::new(&graph, "s", "t")?;
//! let result = network.max_flow()?;
//! assert_eq!(network.flow_value(&result.flow_graph), 3);
//! assert_eq!(network.cut_capacity(&result.min_cut), 0);
//! # Ok::<(), flownet_core::FlowError>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;

pub use crate::algorithm::graph::max_flow::{
    Capacity, DuplicateNamePolicy, Flow, FlowError, FlowMetrics, FlowNetwork, MaxFlowConfig,
    MaxFlowResult, MaxFlowSolver, NetworkConfig, SearchOrder,
};
pub use crate::algorithm::traits::{Algorithm, AlgorithmError, EdgeId, VertexId};
pub use crate::data_structures::graph::{Edge, Graph, Node, Weight};
