//! Augmenting-path maximum flow solver
//!
//! The solver drives a [`FlowNetwork`] through its two states: *searching*,
//! where each round resets the search state, builds a predecessor tree and
//! pushes the bottleneck volume along the found path, and *done*, entered the
//! first time a round finds no path with positive volume.

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::network::{DuplicateNamePolicy, FlowNetwork, NetworkConfig};
use super::search::SearchOrder;
use super::{Capacity, FlowError, FlowMetrics, MaxFlowResult};
use crate::algorithm::traits::{Algorithm, AlgorithmError};
use crate::data_structures::graph::Graph;

/// Solver options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxFlowConfig {
    /// Frontier discipline of each search round
    pub search_order: SearchOrder,
    /// Options used when the solver builds its own network
    pub network: NetworkConfig,
}

/// Maximum flow solver over residual graphs
#[derive(Debug, Clone, Default)]
pub struct MaxFlowSolver {
    config: MaxFlowConfig,
    /// Metrics of the most recent solve
    metrics: FlowMetrics,
}

impl MaxFlowSolver {
    /// Create new maximum flow solver with the given search order
    pub fn new(search_order: SearchOrder) -> Self {
        Self::with_config(MaxFlowConfig {
            search_order,
            ..MaxFlowConfig::default()
        })
    }

    pub fn with_config(config: MaxFlowConfig) -> Self {
        Self {
            config,
            metrics: FlowMetrics::default(),
        }
    }

    pub fn config(&self) -> &MaxFlowConfig {
        &self.config
    }

    pub fn metrics(&self) -> &FlowMetrics {
        &self.metrics
    }

    /// Runs augmenting rounds on `network` until no path carries flow
    ///
    /// Residual twins are created on the first call only, so solving an
    /// already converged network finishes after a single empty search and
    /// reports the same flow.
    pub fn solve(&mut self, network: &mut FlowNetwork) -> Result<MaxFlowResult, FlowError> {
        let started = Instant::now();
        let order = self.config.search_order;
        let twins = network.add_residual_edges();

        info!(
            "Solving max flow `{}` -> `{}` ({} vertices, {} edges, {} new twins, {})",
            network.source_name(),
            network.sink_name(),
            network.vertex_count(),
            network.edge_count(),
            twins,
            order
        );

        let mut metrics = FlowMetrics::default();
        loop {
            network.reset_search();
            metrics.vertices_discovered += network.search(order);
            metrics.edges_scanned += network.search_state().edges_scanned();
            metrics.searches += 1;

            let volume = network.path_volume()?;
            if volume <= 0 {
                break;
            }

            debug!(
                "Round {}: pushing {} along {:?}",
                metrics.searches,
                volume,
                network.augmenting_path()?
            );
            network.augment_path(volume)?;
            metrics.augmentations += 1;
            metrics.path_volumes.push(volume);
        }

        let flow_graph = network.flow_snapshot();
        let max_flow = network.flow_value(&flow_graph);
        let min_cut = network.min_cut();
        metrics.execution_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        info!(
            "Max flow {} after {} augmentations in {:.3} ms",
            max_flow, metrics.augmentations, metrics.execution_time_ms
        );

        self.metrics = metrics.clone();
        Ok(MaxFlowResult {
            max_flow,
            residual_graph: network.residual_snapshot(),
            flow_graph,
            min_cut,
            metrics,
        })
    }
}

impl FlowNetwork {
    /// Solves this network with the default breadth-first solver
    pub fn max_flow(&mut self) -> Result<MaxFlowResult, FlowError> {
        MaxFlowSolver::default().solve(self)
    }

    /// Sums the weight of every edge of `graph` that starts at the source's name
    ///
    /// Applied to [`MaxFlowResult::flow_graph`] this is the flow value; applied
    /// to [`MaxFlowResult::residual_graph`] it is the capacity still unused on
    /// edges leaving the source.
    pub fn flow_value(&self, graph: &Graph) -> Capacity {
        let source = self.source_name();
        graph
            .edges()
            .iter()
            .filter(|edge| edge.start == source)
            .filter_map(|edge| edge.weight)
            .sum()
    }
}

impl Algorithm for MaxFlowSolver {
    type Output = MaxFlowResult;

    fn name(&self) -> &'static str {
        match self.config.search_order {
            SearchOrder::BreadthFirst => "Edmonds-Karp",
            SearchOrder::DepthFirst => "Ford-Fulkerson",
        }
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn description(&self) -> String {
        match self.config.search_order {
            SearchOrder::BreadthFirst => {
                "Augmenting-path maximum flow with breadth-first search: O(V * E) rounds, O(V * E^2) time."
                    .to_string()
            }
            SearchOrder::DepthFirst => {
                "Augmenting-path maximum flow with depth-first search: O(|f| * E) time for integer capacities."
                    .to_string()
            }
        }
    }

    fn parameters(&self) -> HashMap<String, String> {
        let duplicate_names = match self.config.network.duplicate_names {
            DuplicateNamePolicy::FirstMatch => "first_match",
            DuplicateNamePolicy::Reject => "reject",
        };
        HashMap::from([
            ("search_order".to_string(), self.config.search_order.to_string()),
            (
                "reverse_label_suffix".to_string(),
                self.config.network.reverse_label_suffix.clone(),
            ),
            ("duplicate_names".to_string(), duplicate_names.to_string()),
        ])
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError> {
        match name {
            "search_order" => {
                self.config.search_order = value
                    .parse()
                    .map_err(|reason: String| AlgorithmError::invalid_parameter(name, reason))?;
                Ok(())
            }
            "reverse_label_suffix" => {
                if value.is_empty() {
                    return Err(AlgorithmError::invalid_parameter(
                        name,
                        "reverse_label_suffix must not be empty",
                    ));
                }
                self.config.network.reverse_label_suffix = value.to_string();
                Ok(())
            }
            "duplicate_names" => {
                self.config.network.duplicate_names = match value {
                    "first_match" => DuplicateNamePolicy::FirstMatch,
                    "reject" => DuplicateNamePolicy::Reject,
                    other => {
                        return Err(AlgorithmError::invalid_parameter(
                            name,
                            format!("unknown policy `{}`", other),
                        ))
                    }
                };
                Ok(())
            }
            _ => Err(AlgorithmError::invalid_parameter(name, "unknown parameter")),
        }
    }

    fn run(
        &mut self,
        graph: &Graph,
        source: &str,
        sink: &str,
    ) -> Result<MaxFlowResult, AlgorithmError> {
        let mut network =
            FlowNetwork::with_config(graph, source, sink, self.config.network.clone())?;
        Ok(self.solve(&mut network)?)
    }
}
