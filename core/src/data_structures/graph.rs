//! Labeled graph container consumed and produced by the flow engine
//!
//! This module holds the plain graph model: node records `(label, cost)` and
//! edge records `(start, end, directed, label, weight)`. It carries data only;
//! every algorithm lives under [`crate::algorithm`].

use serde::{Deserialize, Serialize};

/// Integer weight carried by nodes and edges
pub type Weight = i64;

/// Node record with a label and an integer cost tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Node label, used as the vertex name by the flow engine
    pub label: String,
    /// Cost tag carried through unchanged
    pub cost: Weight,
}

impl Node {
    pub fn new(label: impl Into<String>, cost: Weight) -> Self {
        Self {
            label: label.into(),
            cost,
        }
    }
}

/// Edge record between two node labels
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Start node label
    pub start: String,
    /// End node label
    pub end: String,
    /// Directedness indicator
    pub directed: bool,
    /// Optional edge label
    pub label: Option<String>,
    /// Optional integer weight (capacity for flow networks)
    pub weight: Option<Weight>,
}

impl Edge {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        directed: bool,
        label: Option<String>,
        weight: Option<Weight>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            directed,
            label,
            weight,
        }
    }

    /// Directed, labeled and weighted edge
    pub fn directed(
        start: impl Into<String>,
        end: impl Into<String>,
        label: impl Into<String>,
        weight: Weight,
    ) -> Self {
        Self::new(start, end, true, Some(label.into()), Some(weight))
    }
}

/// Graph snapshot: ordered node and edge records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    directed: bool,
}

impl Graph {
    /// Creates an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            directed,
        }
    }

    /// Creates a graph from prebuilt node and edge records
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>, directed: bool) -> Self {
        Self {
            nodes,
            edges,
            directed,
        }
    }

    /// Appends a node record
    pub fn add_node(&mut self, label: impl Into<String>, cost: Weight) -> &mut Self {
        self.nodes.push(Node::new(label, cost));
        self
    }

    /// Appends an edge record
    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Node records in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edge records in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Node labels in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.label.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}
