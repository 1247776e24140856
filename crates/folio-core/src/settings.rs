//! The shared settings document and its store.
//!
//! The store is the single mutation entry point for everything both panels
//! observe: the split ratio, the content palette switch, the editor palette,
//! and the persona variant. All writes go through [`SettingsStore::apply`],
//! which clamps the ratio and bumps a revision counter that consumers use to
//! refresh derived state.

use serde::{Deserialize, Serialize};

use crate::split::clamp_ratio;

/// Lower bound for the split ratio, in percent of total width.
pub const MIN_SPLIT_RATIO: f64 = 10.0;

/// Upper bound for the split ratio, in percent of total width.
pub const MAX_SPLIT_RATIO: f64 = 90.0;

/// Default split ratio.
pub const DEFAULT_SPLIT_RATIO: f64 = 50.0;

/// Color scheme for the document editor panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EditorTheme {
    #[default]
    Dark,
    Light,
}

impl EditorTheme {
    /// The next theme in the fixed option cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Display label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Persona filter applied to tagged content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    Teacher,
    Developer,
    #[default]
    Combined,
}

impl Variant {
    /// All variants in cycle order.
    pub const ALL: [Self; 3] = [Self::Teacher, Self::Developer, Self::Combined];

    /// The next variant in the fixed option cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Teacher => Self::Developer,
            Self::Developer => Self::Combined,
            Self::Combined => Self::Teacher,
        }
    }

    /// Display label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Teacher => "Teacher",
            Self::Developer => "Developer",
            Self::Combined => "Combined",
        }
    }
}

/// The shared configuration document observed by both panels.
///
/// Absent fields deserialize to their defaults rather than failing, so a
/// partial document is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    /// Percent of total width owned by the left/document panel.
    /// Always within `[MIN_SPLIT_RATIO, MAX_SPLIT_RATIO]`.
    #[serde(default = "default_split_ratio")]
    pub split_ratio: f64,

    /// Palette switch for the content blocks.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    /// Palette switch for the editor panel.
    #[serde(default)]
    pub editor_theme: EditorTheme,

    /// Persona filter for tagged content.
    #[serde(default)]
    pub variant: Variant,
}

fn default_split_ratio() -> f64 {
    DEFAULT_SPLIT_RATIO
}

fn default_dark_mode() -> bool {
    true
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            split_ratio: DEFAULT_SPLIT_RATIO,
            dark_mode: true,
            editor_theme: EditorTheme::default(),
            variant: Variant::default(),
        }
    }
}

/// A single-field write to the settings document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsUpdate {
    SplitRatio(f64),
    DarkMode(bool),
    EditorTheme(EditorTheme),
    Variant(Variant),
}

/// Owner of the settings document and its only mutation entry point.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    doc: SettingsDocument,
    revision: u64,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(SettingsDocument::default())
    }
}

impl SettingsStore {
    /// Create a store around an initial document. The ratio is clamped so
    /// the store's invariant holds regardless of where the document came
    /// from (CLI flags, a partial JSON file).
    pub fn new(mut doc: SettingsDocument) -> Self {
        doc.split_ratio = clamp_ratio(doc.split_ratio);
        Self { doc, revision: 0 }
    }

    /// Current document snapshot.
    pub fn snapshot(&self) -> SettingsDocument {
        self.doc
    }

    /// Monotonic counter, bumped on every effective write.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a single-field update.
    ///
    /// The split ratio is clamped here, so no caller can commit an
    /// out-of-range value. Returns `false` without bumping the revision when
    /// the stored value would not change, so re-setting a field to its
    /// current value never triggers derived-state recomputation.
    #[allow(clippy::float_cmp)] // idempotence check wants exact equality
    pub fn apply(&mut self, update: SettingsUpdate) -> bool {
        let changed = match update {
            SettingsUpdate::SplitRatio(value) => {
                let clamped = clamp_ratio(value);
                if self.doc.split_ratio == clamped {
                    false
                } else {
                    self.doc.split_ratio = clamped;
                    true
                }
            }
            SettingsUpdate::DarkMode(value) => {
                if self.doc.dark_mode == value {
                    false
                } else {
                    self.doc.dark_mode = value;
                    true
                }
            }
            SettingsUpdate::EditorTheme(value) => {
                if self.doc.editor_theme == value {
                    false
                } else {
                    self.doc.editor_theme = value;
                    true
                }
            }
            SettingsUpdate::Variant(value) => {
                if self.doc.variant == value {
                    false
                } else {
                    self.doc.variant = value;
                    true
                }
            }
        };

        if changed {
            self.revision += 1;
            tracing::debug!(?update, revision = self.revision, "settings updated");
        }
        changed
    }
}
