// src/engine/orchestrator.rs

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::dag::node::TaskId;
use crate::dag::{RunContext, TaskGraph, TaskNode};
use crate::engine::report::{RunOutcome, RunReport, RunState};
use crate::errors::{GraphError, StepFailure};

/// Drives one graph of task nodes to completion.
///
/// Scheduling is Kahn-style and level-synchronous: all nodes whose
/// predecessors have completed form a *wave* and are launched concurrently;
/// the next wave is computed only after the whole wave has finished. This
/// gives maximal concurrency per dependency level while keeping wave
/// membership deterministic for a given graph.
///
/// The orchestrator is payload-agnostic. Data moves between nodes through
/// the [`RunContext`], which it creates fresh for every run and hands back
/// on the report.
#[derive(Debug)]
pub struct Orchestrator {
    graph: TaskGraph,
    nodes: HashMap<TaskId, Arc<TaskNode>>,
}

impl Orchestrator {
    /// Build an orchestrator from a validated graph and its task nodes.
    ///
    /// The node set and the graph's key set must be in 1:1 correspondence;
    /// a mismatch is a construction-time validation error, like every other
    /// malformed-graph condition.
    pub fn new(
        graph: TaskGraph,
        nodes: impl IntoIterator<Item = TaskNode>,
    ) -> Result<Self, GraphError> {
        let mut by_id: HashMap<TaskId, Arc<TaskNode>> = HashMap::new();

        for node in nodes {
            let id = node.id().to_string();
            if !graph.contains(&id) {
                return Err(GraphError::UnknownNode(id));
            }
            if by_id.insert(id.clone(), Arc::new(node)).is_some() {
                return Err(GraphError::DuplicateNode(id));
            }
        }

        for id in graph.tasks() {
            if !by_id.contains_key(id) {
                return Err(GraphError::MissingNode(id.to_string()));
            }
        }

        Ok(Self { graph, nodes: by_id })
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    /// Execute the whole graph.
    ///
    /// Wave loop:
    /// 1. seed the ready set with the graph roots (in-degree 0);
    /// 2. launch `execute()` for every ready node concurrently and await
    ///    them all; a failing node does not cancel its siblings, they run
    ///    to completion regardless;
    /// 3. each success decrements its successors' remaining in-degrees;
    ///    successors reaching zero form the next wave. Successors of a
    ///    failed node are never scheduled;
    /// 4. stop when the ready set is empty or the last wave captured a
    ///    failure.
    ///
    /// The run always produces a [`RunReport`]; a step failure marks the
    /// outcome as failed rather than short-circuiting, so callers can see
    /// exactly which nodes completed before deciding on compensation.
    pub async fn run(&self) -> RunReport {
        let context = Arc::new(RunContext::new());

        let mut remaining: HashMap<TaskId, usize> = self
            .graph
            .tasks()
            .map(|id| (id.to_string(), self.graph.in_degree(id)))
            .collect();

        let mut states: HashMap<TaskId, RunState> = self
            .graph
            .tasks()
            .map(|id| (id.to_string(), RunState::Pending))
            .collect();

        // `roots()` iterates in sorted order, keeping wave membership stable.
        let mut ready: Vec<TaskId> = self.graph.roots().iter().map(|s| s.to_string()).collect();

        let mut waves: Vec<Vec<TaskId>> = Vec::new();
        let mut failures: Vec<StepFailure> = Vec::new();

        info!(tasks = self.graph.len(), "orchestrator run starting");

        while !ready.is_empty() && failures.is_empty() {
            let wave = ready;
            debug!(wave = waves.len() + 1, tasks = ?wave, "launching wave");

            let handles: Vec<_> = wave
                .iter()
                .map(|id| {
                    states.insert(id.clone(), RunState::Running);
                    let node = Arc::clone(&self.nodes[id]);
                    let ctx = Arc::clone(&context);
                    async move { node.execute(ctx).await }
                })
                .collect();

            let results = join_all(handles).await;

            let mut next: Vec<TaskId> = Vec::new();
            for (id, result) in wave.iter().zip(results) {
                match result {
                    Ok(()) => {
                        states.insert(id.clone(), RunState::Completed);
                        debug!(task = %id, "task completed");
                        for succ in self.graph.successors_of(id) {
                            // Validated graphs always have an entry here.
                            if let Some(degree) = remaining.get_mut(succ) {
                                *degree = degree.saturating_sub(1);
                                if *degree == 0 {
                                    next.push(succ.clone());
                                }
                            } else {
                                warn!(task = %succ, "successor missing from in-degree map");
                            }
                        }
                    }
                    Err(err) => {
                        states.insert(id.clone(), RunState::Failed);
                        warn!(task = %id, error = %err, "task failed; its successors will not run");
                        failures.push(StepFailure {
                            task: id.clone(),
                            error: err,
                        });
                    }
                }
            }

            waves.push(wave);
            next.sort();
            ready = next;
        }

        let outcome = if failures.is_empty()
            && states.values().all(|s| *s == RunState::Completed)
        {
            RunOutcome::Succeeded
        } else {
            RunOutcome::Failed
        };

        match outcome {
            RunOutcome::Succeeded => info!(waves = waves.len(), "orchestrator run succeeded"),
            RunOutcome::Failed => warn!(
                waves = waves.len(),
                failures = failures.len(),
                "orchestrator run failed"
            ),
        }

        RunReport {
            outcome,
            states,
            waves,
            failures,
            context,
        }
    }
}
