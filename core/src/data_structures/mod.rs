//! Data structures shared between the engine and its callers

pub mod graph;

pub use self::graph::{Edge, Graph, Node, Weight};
