// src/config/model.rs

use serde::Deserialize;

/// Pipeline configuration as read from a TOML file.
///
/// ```toml
/// [generation]
/// default_teaching_style = "feynman"
///
/// [notes]
/// max_notes = 10
///
/// [notification]
/// enabled = true
/// ```
///
/// All sections are optional and have reasonable defaults, so an empty file
/// (or no file at all, via `PipelineConfig::default()`) is valid.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PipelineConfig {
    /// Module-generation settings from `[generation]`.
    #[serde(default)]
    pub generation: GenerationSection,

    /// Note-upload settings from `[notes]`.
    #[serde(default)]
    pub notes: NotesSection,

    /// Notification settings from `[notification]`.
    #[serde(default)]
    pub notification: NotificationSection,
}

/// `[generation]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSection {
    /// Teaching style applied when the course form does not pick one.
    ///
    /// Must name a known style ("general", "feynman", "mankiw", "krugman",
    /// "liskov", "knuth"); checked by `config::validate`.
    #[serde(default = "default_teaching_style")]
    pub default_teaching_style: String,
}

fn default_teaching_style() -> String {
    "general".to_string()
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            default_teaching_style: default_teaching_style(),
        }
    }
}

/// `[notes]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesSection {
    /// Maximum number of note files accepted on one course form.
    #[serde(default = "default_max_notes")]
    pub max_notes: usize,
}

fn default_max_notes() -> usize {
    10
}

impl Default for NotesSection {
    fn default() -> Self {
        Self {
            max_notes: default_max_notes(),
        }
    }
}

/// `[notification]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSection {
    /// When false, the send-notification step becomes a logged no-op.
    ///
    /// The step still occupies its place in the graph so wave structure is
    /// identical across configurations.
    #[serde(default = "default_notification_enabled")]
    pub enabled: bool,
}

fn default_notification_enabled() -> bool {
    true
}

impl Default for NotificationSection {
    fn default() -> Self {
        Self {
            enabled: default_notification_enabled(),
        }
    }
}
