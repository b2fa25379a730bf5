// src/course/create.rs

//! The course-creation pipeline.
//!
//! Wires the eight workflow steps into a task graph and runs them through
//! the orchestrator:
//!
//! ```text
//! auth -> validate -> create-course -> { create-user-course,
//!                                        upload-notes,
//!                                        create-ai-modules }
//! create-ai-modules -> upload-modules -> send-notification
//! ```
//!
//! Each step's work function reads its predecessors' results from the run
//! context and calls the corresponding service trait. Any step failure fails
//! the whole run; already-persisted records are not rolled back here, the
//! caller owns compensation.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use futures::future::join_all;
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::course::model::{
    Course, CourseCreated, CourseDraft, CreateCourseForm, EmbedFailure, GeneratedModules,
    GenerationRequest, ModulesUploaded, UploadedNotes, User, UserCourse,
};
use crate::course::services::CourseServices;
use crate::course::style::TeachingStyle;
use crate::dag::{TaskGraph, TaskNode};
use crate::engine::Orchestrator;
use crate::errors::GraphError;

/// Step ids of the course-creation graph.
pub mod steps {
    pub const AUTH: &str = "auth";
    pub const VALIDATE: &str = "validate";
    pub const CREATE_COURSE: &str = "create-course";
    pub const CREATE_USER_COURSE: &str = "create-user-course";
    pub const UPLOAD_NOTES: &str = "upload-notes";
    pub const CREATE_AI_MODULES: &str = "create-ai-modules";
    pub const UPLOAD_MODULES: &str = "upload-modules";
    pub const SEND_NOTIFICATION: &str = "send-notification";
}

/// Successor adjacency of the course-creation graph.
fn adjacency() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (steps::AUTH, vec![steps::VALIDATE]),
        (steps::VALIDATE, vec![steps::CREATE_COURSE]),
        (
            steps::CREATE_COURSE,
            vec![
                steps::CREATE_USER_COURSE,
                steps::UPLOAD_NOTES,
                steps::CREATE_AI_MODULES,
            ],
        ),
        (steps::CREATE_USER_COURSE, vec![]),
        (steps::UPLOAD_NOTES, vec![]),
        (steps::CREATE_AI_MODULES, vec![steps::UPLOAD_MODULES]),
        (steps::UPLOAD_MODULES, vec![steps::SEND_NOTIFICATION]),
        (steps::SEND_NOTIFICATION, vec![]),
    ]
}

/// Validate the submitted form against configuration limits and resolve the
/// teaching style.
fn validate_form(
    form: &CreateCourseForm,
    default_style: &str,
    max_notes: usize,
) -> Result<CourseDraft> {
    if form.name.trim().is_empty() {
        bail!("course name must not be empty");
    }
    if form.current_level.trim().is_empty() {
        bail!("current level must not be empty");
    }
    if form.main_outcome.trim().is_empty() {
        bail!("main outcome must not be empty");
    }
    if form.notes.len() > max_notes {
        bail!(
            "too many note files: {} (limit is {max_notes})",
            form.notes.len()
        );
    }

    let teaching_style = match form.teaching_style {
        Some(style) => style,
        None => default_style
            .parse::<TeachingStyle>()
            .map_err(|e| anyhow!(e))
            .context("invalid default teaching style in configuration")?,
    };

    Ok(CourseDraft {
        name: form.name.trim().to_string(),
        current_level: form.current_level.trim().to_string(),
        main_outcome: form.main_outcome.trim().to_string(),
        teaching_style,
    })
}

/// Build the fully-wired orchestrator for one course-creation request.
///
/// Mostly useful to tests and to callers that want the raw [`RunReport`];
/// [`create_course`] is the normal entry point.
///
/// [`RunReport`]: crate::engine::RunReport
pub fn build_create_course_pipeline(
    services: &CourseServices,
    config: &PipelineConfig,
    form: CreateCourseForm,
) -> Result<Orchestrator, GraphError> {
    let form = Arc::new(form);

    let auth = Arc::clone(&services.auth);
    let auth_node = TaskNode::new(
        steps::AUTH,
        "Authenticate",
        "Resolve the current session to a user",
        move |_ctx| {
            let auth = Arc::clone(&auth);
            async move { auth.current_user().await }
        },
    );

    let form_to_validate = Arc::clone(&form);
    let default_style = config.generation.default_teaching_style.clone();
    let max_notes = config.notes.max_notes;
    let validate_node = TaskNode::new(
        steps::VALIDATE,
        "Validate form",
        "Check the submitted form and resolve the teaching style",
        move |_ctx| {
            let form = Arc::clone(&form_to_validate);
            let default_style = default_style.clone();
            async move { validate_form(&form, &default_style, max_notes) }
        },
    );

    let courses = Arc::clone(&services.courses);
    let create_course_node = TaskNode::new(
        steps::CREATE_COURSE,
        "Create course",
        "Persist the course row",
        move |ctx| {
            let courses = Arc::clone(&courses);
            async move {
                let draft = ctx.result::<CourseDraft>(steps::VALIDATE)?;
                courses.create_course(&draft).await
            }
        },
    );

    let courses = Arc::clone(&services.courses);
    let user_course_node = TaskNode::new(
        steps::CREATE_USER_COURSE,
        "Create user-course",
        "Link the course to its owner",
        move |ctx| {
            let courses = Arc::clone(&courses);
            async move {
                let user = ctx.result::<User>(steps::AUTH)?;
                let course = ctx.result::<Course>(steps::CREATE_COURSE)?;
                courses.create_user_course(&user.id, &course.id).await
            }
        },
    );

    let note_store = Arc::clone(&services.notes);
    let embedder = Arc::clone(&services.embedder);
    let form_to_upload = Arc::clone(&form);
    let upload_notes_node = TaskNode::new(
        steps::UPLOAD_NOTES,
        "Upload notes",
        "Store note files and embed each one best-effort",
        move |ctx| {
            let note_store = Arc::clone(&note_store);
            let embedder = Arc::clone(&embedder);
            let form = Arc::clone(&form_to_upload);
            async move {
                let user = ctx.result::<User>(steps::AUTH)?;
                let course = ctx.result::<Course>(steps::CREATE_COURSE)?;

                let mut attachments = Vec::with_capacity(form.notes.len());
                for note in &form.notes {
                    let attachment = note_store
                        .upload(note, &course.id, &user.id)
                        .await
                        .with_context(|| format!("uploading note '{}'", note.name))?;
                    attachments.push(attachment);
                }

                // One embedding per attachment, concurrently. Failures here
                // are logged and collected but never fail this step.
                let embeds = attachments.iter().zip(form.notes.iter()).map(
                    |(attachment, note)| {
                        let embedder = Arc::clone(&embedder);
                        async move {
                            match embedder.embed(note, &attachment.id).await {
                                Ok(()) => {
                                    debug!(
                                        note = %note.name,
                                        attachment = %attachment.id,
                                        "note embedded"
                                    );
                                    None
                                }
                                Err(err) => {
                                    warn!(
                                        note = %note.name,
                                        error = %err,
                                        "embedding failed; continuing without it"
                                    );
                                    Some(EmbedFailure {
                                        attachment_id: attachment.id.clone(),
                                        note_name: note.name.clone(),
                                        error: err.to_string(),
                                    })
                                }
                            }
                        }
                    },
                );
                let embed_failures: Vec<EmbedFailure> =
                    join_all(embeds).await.into_iter().flatten().collect();

                Ok(UploadedNotes {
                    attachments,
                    embed_failures,
                })
            }
        },
    );

    let generator = Arc::clone(&services.generator);
    let ai_modules_node = TaskNode::new(
        steps::CREATE_AI_MODULES,
        "Generate modules",
        "Ask the module generator for course subtopics",
        move |ctx| {
            let generator = Arc::clone(&generator);
            async move {
                let course = ctx.result::<Course>(steps::CREATE_COURSE)?;
                let draft = ctx.result::<CourseDraft>(steps::VALIDATE)?;
                let style = draft.teaching_style;
                let request = GenerationRequest {
                    course_name: course.name.clone(),
                    current_level: course.current_level.clone(),
                    main_outcome: course.outcome.clone(),
                    style,
                    style_guide: style.style_guide(),
                };
                generator.generate(&request).await
            }
        },
    );

    let courses = Arc::clone(&services.courses);
    let upload_modules_node = TaskNode::new(
        steps::UPLOAD_MODULES,
        "Upload modules",
        "Persist the generated modules",
        move |ctx| {
            let courses = Arc::clone(&courses);
            async move {
                let user = ctx.result::<User>(steps::AUTH)?;
                let course = ctx.result::<Course>(steps::CREATE_COURSE)?;
                let modules = ctx.result::<GeneratedModules>(steps::CREATE_AI_MODULES)?;
                let count = courses
                    .insert_modules(&course.id, &user.id, &modules)
                    .await?;
                Ok(ModulesUploaded { count })
            }
        },
    );

    let notifier = Arc::clone(&services.notifier);
    let notifications_enabled = config.notification.enabled;
    let notify_node = TaskNode::new(
        steps::SEND_NOTIFICATION,
        "Send notification",
        "Tell the user their course is ready",
        move |ctx| {
            let notifier = Arc::clone(&notifier);
            async move {
                let user = ctx.result::<User>(steps::AUTH)?;
                let course = ctx.result::<Course>(steps::CREATE_COURSE)?;
                if !notifications_enabled {
                    debug!(user = %user.id, "notifications disabled; skipping");
                    return Ok(());
                }
                notifier.notify(&user.id, &course.name).await
            }
        },
    );

    let graph = TaskGraph::from_adjacency(adjacency())?;
    Orchestrator::new(
        graph,
        [
            auth_node,
            validate_node,
            create_course_node,
            user_course_node,
            upload_notes_node,
            ai_modules_node,
            upload_modules_node,
            notify_node,
        ],
    )
}

/// Run the whole course-creation workflow and assemble its result.
///
/// On any step failure the first captured error is surfaced and nothing is
/// rolled back: records persisted by steps that completed before the failure
/// survive (the session's caller owns compensation and user-facing
/// messaging).
pub async fn create_course(
    services: &CourseServices,
    config: &PipelineConfig,
    form: CreateCourseForm,
) -> Result<CourseCreated> {
    let orchestrator = build_create_course_pipeline(services, config, form)?;
    let report = orchestrator.run().await.into_result()?;
    let ctx = report.context();

    let course = ctx.result::<Course>(steps::CREATE_COURSE)?;
    let user_course = ctx.result::<UserCourse>(steps::CREATE_USER_COURSE)?;
    let modules = ctx.result::<GeneratedModules>(steps::CREATE_AI_MODULES)?;
    let uploaded = ctx.result::<ModulesUploaded>(steps::UPLOAD_MODULES)?;
    let notes = ctx.result::<UploadedNotes>(steps::UPLOAD_NOTES)?;

    Ok(CourseCreated {
        course: (*course).clone(),
        user_course: (*user_course).clone(),
        modules: (*modules).clone(),
        modules_count: uploaded.count,
        embed_failures: notes.embed_failures.clone(),
    })
}
