// src/course/model.rs

use serde::{Deserialize, Serialize};

use crate::course::style::TeachingStyle;

/// The course-creation form as submitted by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseForm {
    /// Course title.
    pub name: String,
    /// The student's current level ("beginner at calculus", ...).
    pub current_level: String,
    /// The main outcome the student wants from the course.
    pub main_outcome: String,
    /// Teaching style; falls back to the configured default when unset.
    #[serde(default)]
    pub teaching_style: Option<TeachingStyle>,
    /// Note files to upload and embed alongside the course.
    #[serde(default)]
    pub notes: Vec<NoteFile>,
}

/// A note file attached to the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The authenticated user, as reported by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// The validated form, with the teaching style resolved.
///
/// Output of the validate step; input to course creation and module
/// generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub name: String,
    pub current_level: String,
    pub main_outcome: String,
    pub teaching_style: TeachingStyle,
}

/// A persisted course row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub current_level: String,
    pub outcome: String,
}

/// The link between a user and a course they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCourse {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
}

/// A stored note attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub url: String,
    pub file_key: String,
    pub content_type: String,
}

/// Output of the upload-notes step.
///
/// Embedding runs best-effort: a failed embedding never fails the step, it
/// is logged and collected here so callers (and tests) can inspect exactly
/// which items were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedNotes {
    pub attachments: Vec<Attachment>,
    pub embed_failures: Vec<EmbedFailure>,
}

/// One failed embedding inside the upload-notes fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFailure {
    pub attachment_id: String,
    pub note_name: String,
    pub error: String,
}

/// What the student needs for one generated subtopic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// How a generated subtopic is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModuleFormat {
    Text,
    Video,
    Md,
    Quiz,
}

/// One generated course subtopic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtopic {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub difficulty: Difficulty,
    pub format: ModuleFormat,
}

/// The generator's output for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedModules {
    pub name: String,
    pub subtopics: Vec<Subtopic>,
}

/// Everything the module generator needs for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub course_name: String,
    pub current_level: String,
    pub main_outcome: String,
    pub style: TeachingStyle,
    /// Prompt style guide for [`GenerationRequest::style`].
    pub style_guide: &'static str,
}

/// Output of the upload-modules step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModulesUploaded {
    pub count: usize,
}

/// The assembled result of a successful course-creation run.
#[derive(Debug, Clone)]
pub struct CourseCreated {
    pub course: Course,
    pub user_course: UserCourse,
    pub modules: GeneratedModules,
    pub modules_count: usize,
    /// Best-effort embedding failures from the upload-notes step; non-empty
    /// here does not mean the run failed.
    pub embed_failures: Vec<EmbedFailure>,
}
