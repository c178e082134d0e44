//! Core algorithm trait definitions for the flow engine
//!
//! This module defines the typed arena identifiers used throughout the
//! engine, the error type surfaced at the algorithm boundary, and the
//! [`Algorithm`] trait through which solvers are named, configured and run
//! against a [`Graph`] snapshot.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::graph::max_flow::FlowError;
use crate::data_structures::graph::Graph;

/// Vertex identifier: index into the flow network's vertex arena
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Edge identifier: index into the flow network's edge arena
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Error types surfaced at the algorithm boundary
#[derive(Debug, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl AlgorithmError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Named, configurable algorithm operating on a graph snapshot
///
/// # Invariants
/// - `run` never mutates the input graph
/// - parameters accepted by `set_parameter` are reported by `parameters`
pub trait Algorithm {
    /// Result produced by a successful run
    type Output;

    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's category (e.g. max_flow)
    fn category(&self) -> &'static str;

    /// Returns a short description with complexity notes
    fn description(&self) -> String;

    /// Returns the current parameter values keyed by name
    fn parameters(&self) -> HashMap<String, String>;

    /// Sets an algorithm parameter from its string form
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError>;

    /// Gets an algorithm parameter value
    fn get_parameter(&self, name: &str) -> Option<String> {
        self.parameters().remove(name)
    }

    /// Runs the algorithm between two named vertices of `graph`
    fn run(&mut self, graph: &Graph, source: &str, sink: &str)
        -> Result<Self::Output, AlgorithmError>;
}
