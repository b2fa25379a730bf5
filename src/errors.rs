// src/errors.rs

//! Crate-wide error types.
//!
//! Work functions and service implementations report failures through
//! `anyhow` (re-exported here); the library's own taxonomy is structured:
//!
//! - [`GraphError`]: the caller-supplied graph or node set is malformed.
//!   Detected at construction, before any scheduling, never at run time.
//! - [`StepFailure`]: a work function failed during a run. Fatal to the run;
//!   the orchestrator performs no retry and no rollback.

use thiserror::Error;

pub use anyhow::{Error, Result};

/// Validation errors raised while building a [`crate::dag::TaskGraph`] or a
/// [`crate::engine::Orchestrator`].
#[derive(Debug, Error)]
pub enum GraphError {
    /// The adjacency map contained no nodes at all.
    #[error("task graph must contain at least one node")]
    Empty,

    /// A successor list referenced an id that is not a key of the map.
    ///
    /// Every node expected to run must appear as a key, even if its
    /// successor list is empty.
    #[error("task '{task}' lists unknown successor '{successor}'")]
    UnknownSuccessor { task: String, successor: String },

    /// A node listed itself as its own successor.
    #[error("task '{0}' cannot depend on itself")]
    SelfDependency(String),

    /// The graph contains a cycle; no valid execution order exists.
    #[error("cycle detected in task graph involving task '{0}'")]
    Cycle(String),

    /// Two task nodes were registered under the same id.
    #[error("duplicate task node '{0}'")]
    DuplicateNode(String),

    /// The graph names a task for which no node was supplied.
    #[error("graph references task '{0}' but no node with that id was provided")]
    MissingNode(String),

    /// A node was supplied whose id does not appear in the graph.
    #[error("node '{0}' does not appear in the task graph")]
    UnknownNode(String),
}

/// A work function failed during an orchestrator run.
///
/// Carries the id of the failing task plus the underlying error. Failures
/// are recorded in wave launch order on the [`crate::engine::RunReport`].
#[derive(Debug, Error)]
#[error("step '{task}' failed: {error}")]
pub struct StepFailure {
    /// Id of the task node whose work function failed.
    pub task: String,
    /// The error the work function returned.
    pub error: anyhow::Error,
}
