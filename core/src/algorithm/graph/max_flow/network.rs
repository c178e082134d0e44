//! Flow network representation with residual graph
//!
//! Vertices and edges live in two arenas addressed by [`VertexId`] and
//! [`EdgeId`]. Each original edge is paired with exactly one residual twin
//! once [`FlowNetwork::add_residual_edges`] has run; the pair store each
//! other's index so augmentation updates both sides in constant time.
//!
//! Every input edge is treated as directed from its start to its end node,
//! whatever its `directed` flag says.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{Capacity, Flow, FlowError};
use crate::algorithm::state::SearchState;
use crate::algorithm::traits::{EdgeId, VertexId};
use crate::data_structures::graph::{Edge, Graph, Node, Weight};

/// How construction treats vertex names that occur more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNamePolicy {
    /// Lookups by name resolve to the first vertex inserted
    #[default]
    FirstMatch,
    /// Construction fails with [`FlowError::DuplicateVertex`]
    Reject,
}

/// Construction options for a [`FlowNetwork`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Appended to an edge label to name its residual twin
    pub reverse_label_suffix: String,
    /// Duplicate vertex name handling
    pub duplicate_names: DuplicateNamePolicy,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            reverse_label_suffix: "'".to_string(),
            duplicate_names: DuplicateNamePolicy::FirstMatch,
        }
    }
}

/// Flow network vertex
#[derive(Debug, Clone)]
pub struct FlowVertex {
    /// Vertex name from the input node record
    pub name: String,
    /// Cost tag, carried through but unused by the algorithm
    pub cost: Weight,
    /// Outgoing edges in insertion order, residual twins last
    out_edges: Vec<EdgeId>,
}

impl FlowVertex {
    fn new(name: String, cost: Weight) -> Self {
        Self {
            name,
            cost,
            out_edges: Vec::new(),
        }
    }

    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }
}

/// Flow edge representation with residual capacity tracking
#[derive(Debug, Clone)]
pub struct FlowEdge {
    /// Source vertex
    pub from: VertexId,
    /// Target vertex
    pub to: VertexId,
    /// Edge label; twins carry the reverse suffix
    pub label: Option<String>,
    /// Current flow through the edge
    pub flow: Flow,
    /// Remaining forward capacity
    pub residual: Capacity,
    /// Paired edge in the opposite direction
    pub twin: Option<EdgeId>,
    /// True for residual twins created by the engine
    pub synthetic: bool,
}

/// Flow network built once from a graph snapshot
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    pub(super) vertices: Vec<FlowVertex>,
    pub(super) edges: Vec<FlowEdge>,
    /// First vertex carrying each name
    index: HashMap<String, VertexId>,
    /// Node labels in input order, duplicates included
    node_order: Vec<String>,
    pub(super) source: VertexId,
    pub(super) sink: VertexId,
    residuals_added: bool,
    pub(crate) search: SearchState,
    config: NetworkConfig,
}

impl FlowNetwork {
    /// Builds a network between `source` and `sink` with default options
    pub fn new(graph: &Graph, source: &str, sink: &str) -> Result<Self, FlowError> {
        Self::with_config(graph, source, sink, NetworkConfig::default())
    }

    /// Builds a network between `source` and `sink`
    ///
    /// Every edge needs a present, non-negative weight and endpoints that name
    /// existing nodes. Edges start with zero flow and residual equal to weight.
    pub fn with_config(
        graph: &Graph,
        source: &str,
        sink: &str,
        config: NetworkConfig,
    ) -> Result<Self, FlowError> {
        let mut network = Self {
            vertices: Vec::with_capacity(graph.node_count()),
            edges: Vec::with_capacity(graph.edge_count() * 2),
            index: HashMap::with_capacity(graph.node_count()),
            node_order: Vec::with_capacity(graph.node_count()),
            source: VertexId(0),
            sink: VertexId(0),
            residuals_added: false,
            search: SearchState::default(),
            config,
        };

        for node in graph.nodes() {
            network.add_vertex(node)?;
        }

        for (index, edge) in graph.edges().iter().enumerate() {
            let from = network.endpoint(index, &edge.start)?;
            let to = network.endpoint(index, &edge.end)?;
            let capacity = match edge.weight {
                Some(weight) if weight >= 0 => weight,
                weight => return Err(FlowError::InvalidCapacity { index, weight }),
            };
            network.add_edge(from, to, edge.label.clone(), 0, capacity, false);
        }

        network.source = network
            .vertex_id(source)
            .ok_or_else(|| FlowError::UnknownVertex(source.to_string()))?;
        network.sink = network
            .vertex_id(sink)
            .ok_or_else(|| FlowError::UnknownVertex(sink.to_string()))?;
        network.search = SearchState::new(network.vertices.len(), network.edges.len());

        debug!(
            "Built flow network: {} vertices, {} edges, source `{}`, sink `{}`",
            network.vertices.len(),
            network.edges.len(),
            source,
            sink
        );

        Ok(network)
    }

    fn add_vertex(&mut self, node: &Node) -> Result<VertexId, FlowError> {
        let id = VertexId(self.vertices.len());
        match self.index.entry(node.label.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
            Entry::Occupied(_) => match self.config.duplicate_names {
                DuplicateNamePolicy::Reject => {
                    return Err(FlowError::DuplicateVertex(node.label.clone()))
                }
                DuplicateNamePolicy::FirstMatch => {
                    warn!("Duplicate vertex name `{}`; lookups use the first", node.label);
                }
            },
        }
        self.vertices.push(FlowVertex::new(node.label.clone(), node.cost));
        self.node_order.push(node.label.clone());
        Ok(id)
    }

    fn endpoint(&self, index: usize, name: &str) -> Result<VertexId, FlowError> {
        self.vertex_id(name).ok_or_else(|| FlowError::UnknownEndpoint {
            index,
            name: name.to_string(),
        })
    }

    fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        label: Option<String>,
        flow: Flow,
        residual: Capacity,
        synthetic: bool,
    ) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(FlowEdge {
            from,
            to,
            label,
            flow,
            residual,
            twin: None,
            synthetic,
        });
        self.vertices[from.as_usize()].out_edges.push(id);
        id
    }

    /// Pairs every original edge with a reverse twin of zero residual
    ///
    /// Runs once per network; later calls return 0 without changes.
    /// Returns the number of twins created.
    pub fn add_residual_edges(&mut self) -> usize {
        if self.residuals_added {
            return 0;
        }

        let original_count = self.edges.len();
        for index in 0..original_count {
            let forward = EdgeId(index);
            let (from, to, flow, label) = {
                let edge = &self.edges[index];
                let base = edge.label.as_deref().unwrap_or_default();
                let label = format!("{}{}", base, self.config.reverse_label_suffix);
                (edge.from, edge.to, edge.flow, label)
            };
            let reverse = self.add_edge(to, from, Some(label), flow, 0, true);
            self.edges[forward.as_usize()].twin = Some(reverse);
            self.edges[reverse.as_usize()].twin = Some(forward);
        }

        self.residuals_added = true;
        self.search.reset(self.vertices.len(), self.edges.len());
        original_count
    }

    pub fn has_residual_edges(&self) -> bool {
        self.residuals_added
    }

    /// First vertex carrying `name`
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&FlowVertex> {
        self.vertices.get(id.as_usize())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&FlowEdge> {
        self.edges.get(id.as_usize())
    }

    #[cfg(test)]
    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Option<&mut FlowEdge> {
        self.edges.get_mut(id.as_usize())
    }

    pub fn vertices(&self) -> &[FlowVertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn sink(&self) -> VertexId {
        self.sink
    }

    pub fn source_name(&self) -> &str {
        self.name_of(self.source)
    }

    pub fn sink_name(&self) -> &str {
        self.name_of(self.sink)
    }

    pub(crate) fn name_of(&self, id: VertexId) -> &str {
        self.vertices
            .get(id.as_usize())
            .map(|vertex| vertex.name.as_str())
            .unwrap_or_default()
    }

    /// Node labels in the order of the input graph
    pub fn node_order(&self) -> &[String] {
        &self.node_order
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    /// Current flow on the first original edge labeled `label`
    pub fn edge_flow(&self, label: &str) -> Option<Flow> {
        self.edges
            .iter()
            .find(|edge| !edge.synthetic && edge.label.as_deref() == Some(label))
            .map(|edge| edge.flow)
    }

    fn snapshot_nodes(&self) -> Vec<Node> {
        self.vertices
            .iter()
            .map(|vertex| Node::new(vertex.name.clone(), 0))
            .collect()
    }

    fn snapshot_edge(&self, edge: &FlowEdge, weight: Weight) -> Edge {
        Edge::new(
            self.name_of(edge.from),
            self.name_of(edge.to),
            true,
            edge.label.clone(),
            Some(weight),
        )
    }

    /// Residual graph: every edge and twin, weight = residual, node cost 0
    pub fn residual_snapshot(&self) -> Graph {
        let edges = self
            .edges
            .iter()
            .map(|edge| self.snapshot_edge(edge, edge.residual))
            .collect();
        Graph::from_parts(self.snapshot_nodes(), edges, true)
    }

    /// Flow assignment: original edges only, weight = current flow
    pub fn flow_snapshot(&self) -> Graph {
        let edges = self
            .edges
            .iter()
            .filter(|edge| !edge.synthetic)
            .map(|edge| self.snapshot_edge(edge, edge.flow))
            .collect();
        Graph::from_parts(self.snapshot_nodes(), edges, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::fixtures;

    #[test]
    fn test_flow_network_creation() {
        fixtures::init_logging();
        let network = FlowNetwork::new(&fixtures::parallel_paths(), "s", "t").unwrap();

        assert_eq!(network.vertex_count(), 3);
        assert_eq!(network.edge_count(), 3);
        assert_eq!(network.source_name(), "s");
        assert_eq!(network.sink_name(), "t");

        let sa = network.edge(EdgeId(0)).unwrap();
        assert_eq!(network.name_of(sa.from), "s");
        assert_eq!(network.name_of(sa.to), "a");
        assert_eq!(sa.flow, 0);
        assert_eq!(sa.residual, 2);
        assert_eq!(sa.twin, None);

        let s = network.vertex(network.source()).unwrap();
        assert_eq!(s.out_edges(), &[EdgeId(0), EdgeId(2)]);
    }

    #[test]
    fn test_residual_edges_added_once() {
        let mut network = FlowNetwork::new(&fixtures::parallel_paths(), "s", "t").unwrap();

        assert_eq!(network.add_residual_edges(), 3);
        assert_eq!(network.edge_count(), 6);
        assert_eq!(network.add_residual_edges(), 0);
        assert_eq!(network.edge_count(), 6);

        let at = network.edge(EdgeId(1)).unwrap();
        let twin = network.edge(at.twin.unwrap()).unwrap();
        assert!(twin.synthetic);
        assert_eq!(twin.from, at.to);
        assert_eq!(twin.to, at.from);
        assert_eq!(twin.residual, 0);
        assert_eq!(twin.label.as_deref(), Some("at'"));
        assert_eq!(twin.twin, Some(EdgeId(1)));

        let a = network.vertex(network.vertex_id("a").unwrap()).unwrap();
        assert_eq!(a.out_edges().len(), 2);
    }

    #[test]
    fn test_custom_reverse_suffix() {
        let config = NetworkConfig {
            reverse_label_suffix: "~rev".to_string(),
            ..NetworkConfig::default()
        };
        let mut network =
            FlowNetwork::with_config(&fixtures::single_path(), "s", "t", config).unwrap();
        network.add_residual_edges();

        assert_eq!(network.edge(EdgeId(1)).unwrap().label.as_deref(), Some("st~rev"));
    }

    #[test]
    fn test_unlabeled_edge_twin_label() {
        let mut graph = Graph::new(true);
        graph
            .add_node("s", 0)
            .add_node("t", 0)
            .add_edge(Edge::new("s", "t", true, None, Some(1)));
        let mut network = FlowNetwork::new(&graph, "s", "t").unwrap();
        network.add_residual_edges();

        assert_eq!(network.edge(EdgeId(1)).unwrap().label.as_deref(), Some("'"));
    }

    #[test]
    fn test_unknown_source_and_sink() {
        let graph = fixtures::single_path();

        assert_eq!(
            FlowNetwork::new(&graph, "x", "t").unwrap_err(),
            FlowError::UnknownVertex("x".to_string())
        );
        assert_eq!(
            FlowNetwork::new(&graph, "s", "y").unwrap_err(),
            FlowError::UnknownVertex("y".to_string())
        );
    }

    #[test]
    fn test_unknown_endpoint() {
        let mut graph = fixtures::single_path();
        graph.add_edge(Edge::directed("s", "ghost", "sg", 1));

        assert_eq!(
            FlowNetwork::new(&graph, "s", "t").unwrap_err(),
            FlowError::UnknownEndpoint {
                index: 1,
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_capacities() {
        let mut missing = fixtures::single_path();
        missing.add_edge(Edge::new("t", "s", true, None, None));
        assert_eq!(
            FlowNetwork::new(&missing, "s", "t").unwrap_err(),
            FlowError::InvalidCapacity {
                index: 1,
                weight: None
            }
        );

        let mut negative = fixtures::single_path();
        negative.add_edge(Edge::directed("t", "s", "ts", -2));
        assert_eq!(
            FlowNetwork::new(&negative, "s", "t").unwrap_err(),
            FlowError::InvalidCapacity {
                index: 1,
                weight: Some(-2)
            }
        );
    }

    #[test]
    fn test_duplicate_names_first_match() {
        fixtures::init_logging();
        let mut graph = Graph::new(true);
        graph
            .add_node("s", 0)
            .add_node("t", 0)
            .add_node("s", 9)
            .add_edge(Edge::directed("s", "t", "st", 1));
        let network = FlowNetwork::new(&graph, "s", "t").unwrap();

        assert_eq!(network.vertex_count(), 3);
        assert_eq!(network.source(), VertexId(0));
        assert_eq!(network.vertex(VertexId(2)).unwrap().cost, 9);
        assert!(network.vertex(VertexId(2)).unwrap().out_edges().is_empty());
        assert_eq!(network.node_order(), &["s", "t", "s"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut graph = fixtures::single_path();
        graph.add_node("t", 0);
        let config = NetworkConfig {
            duplicate_names: DuplicateNamePolicy::Reject,
            ..NetworkConfig::default()
        };

        assert_eq!(
            FlowNetwork::with_config(&graph, "s", "t", config).unwrap_err(),
            FlowError::DuplicateVertex("t".to_string())
        );
    }

    #[test]
    fn test_snapshots_shape() {
        let mut graph = Graph::new(false);
        graph
            .add_node("s", 5)
            .add_node("t", 7)
            .add_edge(Edge::new("s", "t", false, Some("st".into()), Some(3)));
        let mut network = FlowNetwork::new(&graph, "s", "t").unwrap();
        network.add_residual_edges();

        let residual = network.residual_snapshot();
        assert!(residual.is_directed());
        assert!(residual.nodes().iter().all(|node| node.cost == 0));
        assert_eq!(residual.edge_count(), 2);
        assert!(residual.edges().iter().all(|edge| edge.directed));
        assert_eq!(residual.edges()[0].weight, Some(3));
        assert_eq!(residual.edges()[1].start, "t");
        assert_eq!(residual.edges()[1].weight, Some(0));

        let flow = network.flow_snapshot();
        assert_eq!(flow.edge_count(), 1);
        assert_eq!(flow.edges()[0].weight, Some(0));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: NetworkConfig =
            serde_json::from_str(r#"{ "duplicate_names": "reject" }"#).unwrap();

        assert_eq!(config.duplicate_names, DuplicateNamePolicy::Reject);
        assert_eq!(config.reverse_label_suffix, "'");
    }
}
