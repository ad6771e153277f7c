pub mod cli;
pub mod config;
pub mod observability;
mod planner;

pub use planner::*;
