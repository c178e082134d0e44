//! Cut capacity evaluation and cut construction
//!
//! Capacities are read from the network's current residuals, so they mean
//! "capacity still crossing the cut" once a max flow has converged and
//! "original capacity crossing the cut" before the first augmentation.

use std::collections::HashSet;

use log::debug;

use super::network::FlowNetwork;
use super::search::SearchOrder;
use super::Capacity;

impl FlowNetwork {
    /// Residual capacity of edges leaving the named vertex set
    ///
    /// Sums every edge whose start name is in `cut` and whose end name is
    /// not. Duplicate names in `cut` are ignored; unknown names add nothing.
    pub fn cut_capacity<S: AsRef<str>>(&self, cut: &[S]) -> Capacity {
        let members: HashSet<&str> = cut.iter().map(AsRef::as_ref).collect();
        self.crossing_capacity(&members)
    }

    fn crossing_capacity(&self, members: &HashSet<&str>) -> Capacity {
        self.edges
            .iter()
            .filter(|edge| {
                members.contains(self.name_of(edge.from)) && !members.contains(self.name_of(edge.to))
            })
            .map(|edge| edge.residual)
            .sum()
    }

    /// Greedy cut built by single left-to-right insertion
    ///
    /// Starts from `{source}` and tries each other node in input order,
    /// source and sink excluded. A node stays only if it strictly lowers the
    /// cut capacity. The result is a local optimum for that order and need
    /// not be a minimum cut; see [`reachable_cut`](Self::reachable_cut).
    pub fn min_cut(&self) -> Vec<String> {
        let source = self.source_name();
        let sink = self.sink_name();

        let mut cut = vec![source.to_string()];
        let mut members: HashSet<&str> = HashSet::from([source]);
        let mut best = self.crossing_capacity(&members);

        for name in self.node_order() {
            let name = name.as_str();
            if name == source || name == sink || members.contains(name) {
                continue;
            }
            members.insert(name);
            let capacity = self.crossing_capacity(&members);
            if capacity < best {
                best = capacity;
                cut.push(name.to_string());
            } else {
                members.remove(name);
            }
        }

        debug!("Greedy cut {:?} has capacity {}", cut, best);
        cut
    }

    /// Vertices reachable from the source over positive residual capacity
    ///
    /// On a converged network this is the source side of a minimum cut.
    /// Runs a fresh search, replacing the current search state.
    pub fn reachable_cut(&mut self) -> Vec<String> {
        self.reset_search();
        self.search(SearchOrder::BreadthFirst);
        self.search
            .discovered_vertices()
            .map(|id| self.name_of(id).to_string())
            .collect()
    }
}
