//! folio-core: Headless engine for the folio portfolio viewer
//!
//! This crate provides everything below the terminal layer:
//! - The shared settings document, its store, and change propagation
//! - The divider drag state machine and ratio clamping
//! - The portfolio content document, persona filtering, and expansion
//!   defaults

pub mod document;
pub mod settings;
pub mod split;

// Re-export commonly used types
pub use document::{
    default_expanded, hidden_tags, is_teaching_title, sample_document, tag_visible, Contact,
    ContactLink, ContentTree, DocumentError, EducationEntry, Period, Profile, Project, Skill,
    SkillLevel, WorkEntry, DEVELOPER_TAGS, TEACHER_TAGS,
};
pub use settings::{
    EditorTheme, SettingsDocument, SettingsStore, SettingsUpdate, Variant, DEFAULT_SPLIT_RATIO,
    MAX_SPLIT_RATIO, MIN_SPLIT_RATIO,
};
pub use split::{clamp_ratio, DragController, DragSession};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
