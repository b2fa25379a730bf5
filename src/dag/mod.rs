// src/dag/mod.rs

//! Task-graph building blocks.
//!
//! - [`graph`] holds a validated directed acyclic graph of task ids.
//! - [`node`] defines the task node: identity plus a bound async work
//!   function.
//! - [`context`] is the per-run result store that threads data between
//!   nodes.

pub mod context;
pub mod graph;
pub mod node;

pub use context::RunContext;
pub use graph::TaskGraph;
pub use node::{TaskId, TaskNode};
