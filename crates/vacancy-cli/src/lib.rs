//! CLI library components for the vacancy tool.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
