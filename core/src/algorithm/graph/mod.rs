//! Graph algorithms

pub mod max_flow;

pub use self::max_flow::{
    FlowError, FlowMetrics, FlowNetwork, MaxFlowConfig, MaxFlowResult, MaxFlowSolver,
    NetworkConfig, SearchOrder,
};
