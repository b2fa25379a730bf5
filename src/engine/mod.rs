// src/engine/mod.rs

//! Orchestration engine.
//!
//! This module ties together:
//! - the [`orchestrator`] that drives a task graph in level-synchronous
//!   waves
//! - the [`report`] types describing what happened during a run:
//!   per-node states, wave membership, captured step failures and the
//!   run's result store

pub mod orchestrator;
pub mod report;

pub use orchestrator::Orchestrator;
pub use report::{RunOutcome, RunReport, RunState};
