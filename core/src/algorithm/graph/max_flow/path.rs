//! Path volume and augmentation along the predecessor tree

use super::network::FlowNetwork;
use super::{Capacity, FlowError};
use crate::algorithm::traits::EdgeId;

impl FlowNetwork {
    /// Edges of the current source-to-sink path, sink end first
    ///
    /// `Ok(None)` when the last search did not reach the sink. Every link is
    /// checked: the recorded edge must run exactly from the predecessor to the
    /// vertex, and the walk must arrive at the source within `V` steps.
    pub fn path_edges(&self) -> Result<Option<Vec<EdgeId>>, FlowError> {
        let source = self.source;
        let mut vertex = self.sink;
        if self.search.parent(vertex).is_none() {
            return Ok(None);
        }

        let mut path = Vec::new();
        while vertex != source {
            if path.len() >= self.vertex_count() {
                return Err(FlowError::BrokenPredecessorChain);
            }
            let parent = self
                .search
                .parent(vertex)
                .ok_or(FlowError::BrokenPredecessorChain)?;
            match self.edge(parent.edge) {
                Some(edge) if edge.from == parent.vertex && edge.to == vertex => {}
                _ => {
                    return Err(FlowError::MissingEdge {
                        from: self.name_of(parent.vertex).to_string(),
                        to: self.name_of(vertex).to_string(),
                    })
                }
            }
            path.push(parent.edge);
            vertex = parent.vertex;
        }

        Ok(Some(path))
    }

    /// Bottleneck residual capacity of the current path; 0 if the sink is unreached
    pub fn path_volume(&self) -> Result<Capacity, FlowError> {
        let path = match self.path_edges()? {
            Some(path) => path,
            None => return Ok(0),
        };
        Ok(path
            .iter()
            .map(|&id| self.edges[id.as_usize()].residual)
            .min()
            .unwrap_or(0))
    }

    /// Vertex names of the current path, source first
    pub fn augmenting_path(&self) -> Result<Vec<&str>, FlowError> {
        let path = match self.path_edges()? {
            Some(path) => path,
            None => return Ok(Vec::new()),
        };
        let mut names: Vec<&str> = path
            .iter()
            .map(|&id| self.name_of(self.edges[id.as_usize()].to))
            .collect();
        names.push(self.name_of(self.source));
        names.reverse();
        Ok(names)
    }

    /// Pushes `volume` along the current path
    ///
    /// Each path edge gains `volume` flow and loses `volume` residual; its
    /// twin gains `volume` residual and loses `volume` flow. Nothing changes
    /// unless every path edge has a twin.
    pub fn augment_path(&mut self, volume: Capacity) -> Result<(), FlowError> {
        let path = match self.path_edges()? {
            Some(path) => path,
            None => return Ok(()),
        };

        let mut pairs = Vec::with_capacity(path.len());
        for &id in &path {
            let twin = self.edges[id.as_usize()]
                .twin
                .ok_or(FlowError::MissingTwin(id))?;
            pairs.push((id, twin));
        }

        for (forward, reverse) in pairs {
            let edge = &mut self.edges[forward.as_usize()];
            edge.flow += volume;
            edge.residual -= volume;
            let twin = &mut self.edges[reverse.as_usize()];
            twin.residual += volume;
            twin.flow -= volume;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::{fixtures, SearchOrder};
    use crate::algorithm::state::Predecessor;
    use crate::algorithm::traits::VertexId;

    fn searched(graph: &crate::data_structures::graph::Graph) -> FlowNetwork {
        let mut network = FlowNetwork::new(graph, "s", "t").unwrap();
        network.add_residual_edges();
        network.reset_search();
        network.search(SearchOrder::BreadthFirst);
        network
    }

    #[test]
    fn test_path_volume_is_bottleneck() {
        let mut network = searched(&fixtures::parallel_paths());
        assert_eq!(network.augmenting_path().unwrap(), vec!["s", "t"]);
        assert_eq!(network.path_volume().unwrap(), 1);

        network.augment_path(1).unwrap();
        network.reset_search();
        network.search(SearchOrder::BreadthFirst);

        assert_eq!(network.augmenting_path().unwrap(), vec!["s", "a", "t"]);
        assert_eq!(network.path_volume().unwrap(), 2);
    }

    #[test]
    fn test_unreached_sink_has_zero_volume() {
        let network = searched(&fixtures::disconnected());

        assert_eq!(network.path_edges().unwrap(), None);
        assert_eq!(network.path_volume().unwrap(), 0);
        assert!(network.augmenting_path().unwrap().is_empty());
    }

    #[test]
    fn test_augment_updates_edge_and_twin() {
        let mut network = searched(&fixtures::single_path());
        network.augment_path(2).unwrap();

        let forward = network.edge(EdgeId(0)).unwrap();
        let twin = network.edge(EdgeId(1)).unwrap();
        assert_eq!((forward.flow, forward.residual), (2, 1));
        assert_eq!((twin.flow, twin.residual), (-2, 2));
    }

    #[test]
    fn test_augment_without_twins_fails_cleanly() {
        let mut network = FlowNetwork::new(&fixtures::single_path(), "s", "t").unwrap();
        network.reset_search();
        network.search(SearchOrder::BreadthFirst);

        let error = network.augment_path(1).unwrap_err();
        assert_eq!(error, FlowError::MissingTwin(EdgeId(0)));
        assert!(error.is_invariant_violation());
        assert_eq!(network.edge(EdgeId(0)).unwrap().flow, 0);
    }

    #[test]
    fn test_chain_not_reaching_source() {
        let mut network = searched(&fixtures::parallel_paths());
        let (a, t) = (network.vertex_id("a").unwrap(), network.sink());
        network.reset_search();
        network.search.set_parent(
            t,
            Predecessor {
                vertex: a,
                edge: EdgeId(1),
            },
        );

        assert_eq!(network.path_volume(), Err(FlowError::BrokenPredecessorChain));
    }

    #[test]
    fn test_cyclic_chain_is_detected() {
        let mut network = searched(&fixtures::crossing());
        let (a, b, t) = (
            network.vertex_id("a").unwrap(),
            network.vertex_id("b").unwrap(),
            network.sink(),
        );
        network.reset_search();
        // t <- b <- a <- b ... never reaches s
        network.search.set_parent(t, Predecessor { vertex: b, edge: EdgeId(4) });
        network.search.set_parent(b, Predecessor { vertex: a, edge: EdgeId(2) });
        network.search.set_parent(a, Predecessor { vertex: b, edge: EdgeId(7) });

        assert_eq!(network.path_edges(), Err(FlowError::BrokenPredecessorChain));
    }

    #[test]
    fn test_mismatched_edge_is_reported() {
        let mut network = searched(&fixtures::parallel_paths());
        let t = network.sink();
        network.search.set_parent(
            t,
            Predecessor {
                vertex: VertexId(0),
                edge: EdgeId(1),
            },
        );

        assert_eq!(
            network.path_volume(),
            Err(FlowError::MissingEdge {
                from: "s".to_string(),
                to: "t".to_string()
            })
        );
    }
}
