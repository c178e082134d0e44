//! FLOWNET Algorithm Framework
//! Augmenting-path maximum flow, cut evaluation and their shared search state
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traits;
pub mod graph;
pub mod state;

pub use self::traits::*;
pub use self::graph::*;
