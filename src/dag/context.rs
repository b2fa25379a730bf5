// src/dag/context.rs

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

use crate::dag::node::{TaskId, TaskOutput};

/// Run-scoped result store, keyed by task id.
///
/// One context exists per orchestrator run; it is created fresh at the start
/// of `run()` and handed back on the run report, so a stale result can never
/// leak from one run into the next.
///
/// Write discipline: each slot is written exactly once, by the task node it
/// belongs to, after its work function succeeds. Readers are work functions
/// of downstream nodes; the wave barrier guarantees every writer finished
/// before any reader in a later wave starts, so the interior mutex is never
/// contended across a writer/reader pair.
#[derive(Debug, Default)]
pub struct RunContext {
    slots: Mutex<HashMap<TaskId, TaskOutput>>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a task's output. Errors if the slot is already occupied.
    pub(crate) fn store(&self, id: &str, value: TaskOutput) -> Result<()> {
        let mut slots = self.slots.lock().expect("result store poisoned");
        if slots.contains_key(id) {
            return Err(anyhow!("result slot for task '{id}' written twice"));
        }
        slots.insert(id.to_string(), value);
        Ok(())
    }

    /// Whether the given task has produced a result in this run.
    pub fn has_result(&self, id: &str) -> bool {
        self.slots
            .lock()
            .expect("result store poisoned")
            .contains_key(id)
    }

    /// Typed read of a predecessor's result.
    ///
    /// Errors if the slot is empty (the producing task has not completed in
    /// this run, which is a wiring mistake: the graph should have ordered
    /// the reader after the producer) or if the stored value is of a
    /// different type than requested.
    pub fn result<T>(&self, id: &str) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let value = self
            .slots
            .lock()
            .expect("result store poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("no result for task '{id}' in this run"))?;

        value
            .downcast::<T>()
            .map_err(|_| anyhow!("result of task '{id}' has an unexpected type"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RunContext;

    #[test]
    fn slots_are_write_once() {
        let ctx = RunContext::new();

        ctx.store("auth", Arc::new(1u32)).expect("first write");
        let err = ctx.store("auth", Arc::new(2u32)).unwrap_err();
        assert!(err.to_string().contains("written twice"));

        // The original value survives the rejected write.
        assert_eq!(*ctx.result::<u32>("auth").unwrap(), 1);
    }
}
