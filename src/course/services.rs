// src/course/services.rs

//! Service seams for the external collaborators of the course pipeline.
//!
//! The pipeline only ever talks to these traits; the embedding application
//! supplies the real session provider, database, file store, LLM client and
//! notification channel. This crate ships no concrete implementations of
//! them (tests use in-memory fakes).

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::course::model::{
    Attachment, Course, CourseDraft, GeneratedModules, GenerationRequest, NoteFile, User,
    UserCourse,
};

/// Session provider: who is making this request?
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the current session to a user, or fail if unauthenticated.
    async fn current_user(&self) -> Result<User>;
}

/// Persistence for courses, user-course links and generated modules.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create_course(&self, draft: &CourseDraft) -> Result<Course>;

    async fn create_user_course(&self, user_id: &str, course_id: &str) -> Result<UserCourse>;

    /// Persist generated modules for a course; returns how many rows were
    /// written.
    async fn insert_modules(
        &self,
        course_id: &str,
        user_id: &str,
        modules: &GeneratedModules,
    ) -> Result<usize>;
}

/// File storage for uploaded notes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn upload(&self, note: &NoteFile, course_id: &str, user_id: &str) -> Result<Attachment>;
}

/// Embedding backend for uploaded notes.
///
/// Invoked once per stored attachment, concurrently; failures are
/// best-effort from the pipeline's point of view.
#[async_trait]
pub trait NoteEmbedder: Send + Sync {
    async fn embed(&self, note: &NoteFile, attachment_id: &str) -> Result<()>;
}

/// The hosted LLM behind module generation.
#[async_trait]
pub trait ModuleGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedModules>;
}

/// User-facing notification channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, user_id: &str, course_name: &str) -> Result<()>;
}

/// The full set of collaborators the pipeline is wired against.
#[derive(Clone)]
pub struct CourseServices {
    pub auth: Arc<dyn AuthService>,
    pub courses: Arc<dyn CourseRepository>,
    pub notes: Arc<dyn NoteStore>,
    pub embedder: Arc<dyn NoteEmbedder>,
    pub generator: Arc<dyn ModuleGenerator>,
    pub notifier: Arc<dyn Notifier>,
}
