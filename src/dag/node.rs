// src/dag/node.rs

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use futures::FutureExt;
use futures::future::BoxFuture;

use crate::dag::context::RunContext;

/// Public type alias for task ids throughout the crate.
pub type TaskId = String;

/// Type-erased output of a work function.
///
/// The orchestrator is payload-agnostic: it only understands completion and
/// failure. Downstream work functions recover the concrete type through
/// [`RunContext::result`].
pub type TaskOutput = Arc<dyn Any + Send + Sync>;

type WorkFn = Box<dyn Fn(Arc<RunContext>) -> BoxFuture<'static, Result<TaskOutput>> + Send + Sync>;

/// A named unit of orchestrated work.
///
/// A node is constructed once, with its final, fully-bound asynchronous
/// operation; there is no rebinding of the work function afterwards. Inputs
/// flow in through the [`RunContext`] argument: the work function reads its
/// predecessors' result slots, which the graph guarantees are populated by
/// the time the node runs.
pub struct TaskNode {
    id: TaskId,
    label: String,
    description: String,
    work: WorkFn,
}

impl TaskNode {
    /// Create a node from an id, human-readable label/description and an
    /// async work function producing a typed value.
    ///
    /// The output type only needs to be nameable by the downstream readers;
    /// the node itself stores it type-erased.
    pub fn new<T, F, Fut>(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        work: F,
    ) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(Arc<RunContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let work: WorkFn = Box::new(move |ctx| {
            let fut = work(ctx);
            async move { fut.await.map(|value| Arc::new(value) as TaskOutput) }.boxed()
        });

        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            work,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the work function against the shared run context.
    ///
    /// On success the output is stored in the context under this node's id
    /// (write-once; a second write within the same run is an error). On
    /// failure nothing is stored and the error propagates to the
    /// orchestrator, which records it as a step failure.
    pub async fn execute(&self, ctx: Arc<RunContext>) -> Result<()> {
        let output = (self.work)(Arc::clone(&ctx)).await?;
        ctx.store(&self.id, output)
    }
}

impl fmt::Debug for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskNode")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
