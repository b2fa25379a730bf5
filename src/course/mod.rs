// src/course/mod.rs

//! The course-creation workflow.
//!
//! - [`model`] holds the domain types moving through the pipeline.
//! - [`services`] defines the seams to the external collaborators
//!   (auth, persistence, file store, module generator, notifications).
//! - [`style`] carries the teaching-style prompt guides.
//! - [`create`] wires the eight-step pipeline and exposes the
//!   `create_course` entry point.

pub mod create;
pub mod model;
pub mod services;
pub mod style;

pub use create::{build_create_course_pipeline, create_course, steps};
pub use model::{
    Attachment, Course, CourseCreated, CourseDraft, CreateCourseForm, Difficulty, EmbedFailure,
    GeneratedModules, GenerationRequest, ModuleFormat, ModulesUploaded, NoteFile, Subtopic,
    UploadedNotes, User, UserCourse,
};
pub use services::{
    AuthService, CourseRepository, CourseServices, ModuleGenerator, NoteEmbedder, NoteStore,
    Notifier,
};
pub use style::TeachingStyle;
