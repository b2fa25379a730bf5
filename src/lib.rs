// src/lib.rs

//! courseflow: the course-creation workflow of a learning-management
//! application, built around a payload-agnostic DAG orchestrator.
//!
//! The orchestrator runs a graph of asynchronous task nodes in
//! level-synchronous waves: every node whose predecessors have completed is
//! launched concurrently, the whole wave is awaited, and only then is the
//! next wave computed. Data flows between nodes through an explicit per-run
//! result store rather than shared mutable closures.
//!
//! The `course` module wires the concrete pipeline:
//! authenticate → validate → create course → {create user-course, upload
//! notes + embed, generate AI modules} → upload modules → notify.
//!
//! This is an in-process library: it owns no CLI, wire protocol or storage.
//! The collaborators (session provider, database, file store, LLM client,
//! notification channel) come in through the `course::services` traits.

pub mod config;
pub mod course;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;

pub use course::{CourseServices, CreateCourseForm, create_course};
pub use dag::{RunContext, TaskGraph, TaskNode};
pub use engine::{Orchestrator, RunOutcome, RunReport, RunState};
pub use errors::{GraphError, StepFailure};
