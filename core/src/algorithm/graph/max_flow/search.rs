//! Augmenting-path search over the residual graph
//!
//! One call explores every vertex reachable from the source over edges with
//! positive residual capacity and records a predecessor for each. Every
//! outgoing edge of every discovered vertex is processed exactly once per
//! round. The frontier discipline only changes which path is found, never
//! whether one exists.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use super::network::FlowNetwork;
use crate::algorithm::state::Predecessor;
use crate::algorithm::traits::VertexId;

/// Frontier discipline for the augmenting-path search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    /// FIFO frontier: shortest augmenting paths, `O(V * E)` rounds (Edmonds-Karp)
    #[default]
    BreadthFirst,
    /// LIFO frontier: depth-first exploration (Ford-Fulkerson)
    DepthFirst,
}

impl SearchOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::BreadthFirst => "breadth_first",
            SearchOrder::DepthFirst => "depth_first",
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth_first" | "bfs" => Ok(SearchOrder::BreadthFirst),
            "depth_first" | "dfs" => Ok(SearchOrder::DepthFirst),
            other => Err(format!("unknown search order `{}`", other)),
        }
    }
}

impl FlowNetwork {
    /// Clears discovered flags, predecessors and processed flags
    pub fn reset_search(&mut self) {
        let (vertices, edges) = (self.vertex_count(), self.edge_count());
        self.search.reset(vertices, edges);
    }

    /// Builds the predecessor tree of the current residual graph
    ///
    /// Expects a preceding [`reset_search`](Self::reset_search). Returns the
    /// number of vertices discovered, the source included.
    pub fn search(&mut self, order: SearchOrder) -> usize {
        let source = self.source;
        let mut frontier: VecDeque<VertexId> = VecDeque::new();
        frontier.push_back(source);
        self.search.discover(source);

        while let Some(vertex) = match order {
            SearchOrder::BreadthFirst => frontier.pop_front(),
            SearchOrder::DepthFirst => frontier.pop_back(),
        } {
            let out_edges = match self.vertices.get(vertex.as_usize()) {
                Some(v) => v.out_edges(),
                None => continue,
            };

            for &edge_id in out_edges {
                if !self.search.process(edge_id) {
                    continue;
                }
                let edge = &self.edges[edge_id.as_usize()];
                trace!("Scan {} -> {} (residual {})", edge.from, edge.to, edge.residual);

                if edge.residual > 0 && !self.search.is_discovered(edge.to) {
                    self.search.discover(edge.to);
                    self.search.set_parent(
                        edge.to,
                        Predecessor {
                            vertex,
                            edge: edge_id,
                        },
                    );
                    frontier.push_back(edge.to);
                }
            }
        }

        self.search.discovered_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::fixtures;
    use crate::algorithm::traits::EdgeId;

    fn searched(order: SearchOrder) -> FlowNetwork {
        let mut network = FlowNetwork::new(&fixtures::parallel_paths(), "s", "t").unwrap();
        network.add_residual_edges();
        network.reset_search();
        network.search(order);
        network
    }

    #[test]
    fn test_search_order_parsing() {
        assert_eq!("breadth_first".parse::<SearchOrder>(), Ok(SearchOrder::BreadthFirst));
        assert_eq!("dfs".parse::<SearchOrder>(), Ok(SearchOrder::DepthFirst));
        assert!("sideways".parse::<SearchOrder>().is_err());
        assert_eq!(SearchOrder::DepthFirst.to_string(), "depth_first");
        assert_eq!(SearchOrder::default(), SearchOrder::BreadthFirst);
    }

    #[test]
    fn test_breadth_first_finds_direct_edge() {
        let network = searched(SearchOrder::BreadthFirst);
        let t = network.sink();

        let parent = network.search_state().parent(t).unwrap();
        assert_eq!(parent.vertex, network.source());
        assert_eq!(parent.edge, EdgeId(2));
    }

    #[test]
    fn test_every_edge_of_reached_vertices_processed_once() {
        for order in [SearchOrder::BreadthFirst, SearchOrder::DepthFirst] {
            let network = searched(order);
            let state = network.search_state();

            assert_eq!(state.discovered_count(), 3);
            assert_eq!(state.edges_scanned(), network.edge_count());
            assert!((0..network.edge_count()).all(|i| state.is_processed(EdgeId(i))));
        }
    }

    #[test]
    fn test_saturated_edges_are_not_traversed() {
        let mut network = FlowNetwork::new(&fixtures::single_path(), "s", "t").unwrap();
        network.add_residual_edges();
        network.edge_mut(EdgeId(0)).unwrap().residual = 0;

        network.reset_search();
        let discovered = network.search(SearchOrder::BreadthFirst);

        assert_eq!(discovered, 1);
        assert!(!network.search_state().is_discovered(network.sink()));
        assert!(network.search_state().is_processed(EdgeId(0)));
    }

    #[test]
    fn test_source_has_no_parent() {
        let network = searched(SearchOrder::DepthFirst);
        assert!(network.search_state().is_discovered(network.source()));
        assert_eq!(network.search_state().parent(network.source()), None);
    }
}
