// src/engine/report.rs

use std::collections::HashMap;
use std::sync::Arc;

use crate::dag::RunContext;
use crate::dag::node::TaskId;
use crate::errors::StepFailure;

/// Per-run state of a task node.
///
/// `Pending → Running → Completed | Failed`. A node whose predecessor failed
/// never leaves `Pending`: it is unreachable for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Not yet eligible (or permanently unreachable after an upstream failure).
    Pending,
    /// Launched as part of the current wave.
    Running,
    /// Work function returned successfully; result slot is populated.
    Completed,
    /// Work function failed; no result was stored, successors never run.
    Failed,
}

/// Outcome of a whole orchestrator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every node reached `Completed`.
    Succeeded,
    /// At least one step failed; some nodes may never have run.
    Failed,
}

/// Everything the orchestrator learned during one run.
///
/// The report is returned for failed runs too: callers that need to
/// compensate for already-persisted side effects can inspect which steps
/// completed and read their results from [`RunReport::context`]. The
/// orchestrator itself performs no rollback.
#[derive(Debug)]
pub struct RunReport {
    pub(crate) outcome: RunOutcome,
    pub(crate) states: HashMap<TaskId, RunState>,
    pub(crate) waves: Vec<Vec<TaskId>>,
    pub(crate) failures: Vec<StepFailure>,
    pub(crate) context: Arc<RunContext>,
}

impl RunReport {
    pub fn outcome(&self) -> RunOutcome {
        self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome == RunOutcome::Succeeded
    }

    /// Final state of a node. Unknown ids report `Pending`.
    pub fn state_of(&self, id: &str) -> RunState {
        self.states.get(id).copied().unwrap_or(RunState::Pending)
    }

    /// Wave membership in launch order.
    ///
    /// Membership is deterministic for a given graph (ids sorted within each
    /// wave), even though completion order inside a wave is not.
    pub fn waves(&self) -> &[Vec<TaskId>] {
        &self.waves
    }

    /// All captured step failures, in wave launch order.
    pub fn failures(&self) -> &[StepFailure] {
        &self.failures
    }

    /// The first captured step failure, if the run failed.
    pub fn first_failure(&self) -> Option<&StepFailure> {
        self.failures.first()
    }

    /// The result store for this run.
    pub fn context(&self) -> &Arc<RunContext> {
        &self.context
    }

    /// Convert into a `Result`, surfacing the first step failure.
    pub fn into_result(mut self) -> Result<Self, StepFailure> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(self.failures.remove(0))
        }
    }
}
