//! Live document editor view.
//!
//! The left panel renders the content tree as a pseudo-JSON document. Four
//! fields are interactive, spliced in at the position of the settings keys:
//! a bounded numeric input for the split ratio and three closed selectors.
//! Every edit writes straight through the settings store; the numeric field
//! commits on each keystroke so the split moves while the user types.

use folio_core::{clamp_ratio, ContentTree, SettingsDocument};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::{IconSet, Theme};

/// Maximum characters accepted by the ratio buffer ("90.5" fits).
const RATIO_BUFFER_MAX: usize = 5;

/// The interactive fields, in tree order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    SplitRatio,
    DarkMode,
    EditorTheme,
    Variant,
}

impl EditorField {
    pub const ALL: [Self; 4] = [
        Self::SplitRatio,
        Self::DarkMode,
        Self::EditorTheme,
        Self::Variant,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::SplitRatio => Self::DarkMode,
            Self::DarkMode => Self::EditorTheme,
            Self::EditorTheme => Self::Variant,
            Self::Variant => Self::SplitRatio,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::SplitRatio => Self::Variant,
            Self::DarkMode => Self::SplitRatio,
            Self::EditorTheme => Self::DarkMode,
            Self::Variant => Self::EditorTheme,
        }
    }
}

/// Edit buffer for the bounded numeric ratio field.
///
/// The buffer starts empty each time the field is entered; every change
/// that parses yields a clamped value for the caller to commit, mirroring a
/// number input that applies as you type.
#[derive(Debug, Clone, Default)]
pub struct RatioInput {
    buffer: String,
}

impl RatioInput {
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Append a character. Returns the clamped value to commit when the new
    /// buffer parses.
    pub fn insert(&mut self, ch: char) -> Option<f64> {
        let valid = ch.is_ascii_digit() || (ch == '.' && !self.buffer.contains('.'));
        if !valid || self.buffer.len() >= RATIO_BUFFER_MAX {
            return None;
        }
        self.buffer.push(ch);
        self.parsed()
    }

    /// Remove the last character. Returns a commit value when the remaining
    /// buffer still parses.
    pub fn backspace(&mut self) -> Option<f64> {
        self.buffer.pop();
        self.parsed()
    }

    fn parsed(&self) -> Option<f64> {
        self.buffer.parse::<f64>().ok().map(clamp_ratio)
    }
}

/// Local state of the editor panel.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub selected: EditorField,
    pub ratio_input: RatioInput,
    pub scroll: u16,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move field selection down, resetting any in-progress ratio edit.
    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
        self.ratio_input.clear();
    }

    /// Move field selection up, resetting any in-progress ratio edit.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
        self.ratio_input.clear();
    }
}

/// Format a ratio the way the pseudo-document shows numbers.
#[allow(clippy::cast_possible_truncation)]
pub fn format_ratio(ratio: f64) -> String {
    if (ratio - ratio.round()).abs() < 1e-9 {
        format!("{}", ratio.round() as i64)
    } else {
        format!("{ratio:.1}")
    }
}

struct TreeStyles {
    key: Style,
    string: Style,
    scalar: Style,
    punct: Style,
    selected: Style,
    selector: Style,
}

impl TreeStyles {
    fn new(theme: &Theme) -> Self {
        Self {
            key: Style::default().fg(theme.primary),
            string: Style::default().fg(theme.success),
            scalar: Style::default().fg(theme.warning),
            punct: Style::default().fg(theme.muted),
            selected: Style::default()
                .fg(theme.text)
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
            selector: Style::default().fg(theme.secondary),
        }
    }
}

/// Render the editor panel content.
#[allow(clippy::too_many_lines)]
pub fn lines(
    doc: &ContentTree,
    settings: SettingsDocument,
    state: &EditorState,
    theme: &Theme,
    icons: IconSet,
    focused: bool,
) -> Vec<Line<'static>> {
    let s = TreeStyles::new(theme);
    let mut out = Vec::new();

    let punct = |text: &str| Span::styled(text.to_string(), s.punct);
    let open = |out: &mut Vec<Line<'static>>, text: &str| {
        out.push(Line::from(Span::styled(text.to_string(), s.punct)));
    };

    open(&mut out, "{");

    // profile
    out.push(obj_open(1, "profile", &s));
    out.push(kv_string(2, "name", &doc.profile.name, true, &s));
    out.push(kv_string(2, "headline", &doc.profile.headline, true, &s));
    if let Some(location) = &doc.profile.location {
        out.push(kv_string(2, "location", location, true, &s));
    }
    out.push(kv_string(2, "bio", &ellipsize(&doc.profile.bio, 36), false, &s));
    out.push(Line::from(vec![indent(1), punct("},")]));

    // settings, with the four interactive fields
    out.push(obj_open(1, "settings", &s));
    out.push(ratio_line(settings, state, focused, &s));
    out.push(selector_line(
        2,
        "darkMode",
        &settings.dark_mode.to_string(),
        false,
        focused && state.selected == EditorField::DarkMode,
        icons,
        &s,
        true,
    ));
    out.push(selector_line(
        2,
        "editorTheme",
        settings.editor_theme.label(),
        true,
        focused && state.selected == EditorField::EditorTheme,
        icons,
        &s,
        true,
    ));
    out.push(selector_line(
        2,
        "variant",
        settings.variant.label(),
        true,
        focused && state.selected == EditorField::Variant,
        icons,
        &s,
        false,
    ));
    out.push(Line::from(vec![indent(1), punct("},")]));

    // skills
    out.push(arr_open(1, "skills", &s));
    for (i, skill) in doc.skills.iter().enumerate() {
        let last = i + 1 == doc.skills.len();
        out.push(string_item(
            2,
            &format!("{} ({})", skill.name, skill.level.label()),
            !last,
            &s,
        ));
    }
    out.push(Line::from(vec![indent(1), punct("],")]));

    // work
    out.push(arr_open(1, "work", &s));
    for (i, entry) in doc.work.iter().enumerate() {
        let last = i + 1 == doc.work.len();
        out.push(Line::from(vec![
            indent(2),
            punct("{ "),
            Span::styled(format!("\"{}\"", entry.title), s.string),
            punct(" @ "),
            Span::styled(format!("\"{}\"", entry.organization), s.string),
            punct(if last { " }" } else { " }," }),
        ]));
    }
    out.push(Line::from(vec![indent(1), punct("],")]));

    // education
    out.push(arr_open(1, "education", &s));
    for (i, entry) in doc.education.iter().enumerate() {
        let last = i + 1 == doc.education.len();
        out.push(string_item(
            2,
            &format!("{}, {}", entry.degree, entry.institution),
            !last,
            &s,
        ));
    }
    out.push(Line::from(vec![indent(1), punct("],")]));

    // projects
    out.push(arr_open(1, "projects", &s));
    for (i, project) in doc.projects.iter().enumerate() {
        let last = i + 1 == doc.projects.len();
        out.push(string_item(2, &project.name, !last, &s));
    }
    out.push(Line::from(vec![indent(1), punct("],")]));

    // contact
    out.push(obj_open(1, "contact", &s));
    out.push(kv_string(2, "email", &doc.contact.email, doc.contact.website.is_some(), &s));
    if let Some(website) = &doc.contact.website {
        out.push(kv_string(2, "website", website, false, &s));
    }
    out.push(Line::from(vec![indent(1), punct("}")]));

    open(&mut out, "}");
    out
}

fn indent(level: usize) -> Span<'static> {
    Span::raw("  ".repeat(level))
}

fn obj_open(level: usize, key: &str, s: &TreeStyles) -> Line<'static> {
    Line::from(vec![
        indent(level),
        Span::styled(format!("\"{key}\""), s.key),
        Span::styled(": {".to_string(), s.punct),
    ])
}

fn arr_open(level: usize, key: &str, s: &TreeStyles) -> Line<'static> {
    Line::from(vec![
        indent(level),
        Span::styled(format!("\"{key}\""), s.key),
        Span::styled(": [".to_string(), s.punct),
    ])
}

fn kv_string(level: usize, key: &str, value: &str, comma: bool, s: &TreeStyles) -> Line<'static> {
    Line::from(vec![
        indent(level),
        Span::styled(format!("\"{key}\""), s.key),
        Span::styled(": ".to_string(), s.punct),
        Span::styled(format!("\"{value}\""), s.string),
        Span::styled(if comma { "," } else { "" }.to_string(), s.punct),
    ])
}

fn string_item(level: usize, value: &str, comma: bool, s: &TreeStyles) -> Line<'static> {
    Line::from(vec![
        indent(level),
        Span::styled(format!("\"{value}\""), s.string),
        Span::styled(if comma { "," } else { "" }.to_string(), s.punct),
    ])
}

/// The numeric splitRatio field. While selected it shows the edit buffer
/// with a cursor; otherwise the committed value.
fn ratio_line(
    settings: SettingsDocument,
    state: &EditorState,
    focused: bool,
    s: &TreeStyles,
) -> Line<'static> {
    let selected = focused && state.selected == EditorField::SplitRatio;

    let value = if selected && !state.ratio_input.is_empty() {
        state.ratio_input.buffer().to_string()
    } else {
        format_ratio(settings.split_ratio)
    };

    let value_span = if selected {
        Span::styled(format!("{value}_"), s.selected)
    } else {
        Span::styled(value, s.scalar)
    };

    let mut spans = vec![
        indent(2),
        Span::styled("\"splitRatio\"".to_string(), s.key),
        Span::styled(": ".to_string(), s.punct),
        value_span,
        Span::styled(",".to_string(), s.punct),
    ];
    if selected {
        spans.push(Span::styled("  10..90".to_string(), s.punct));
    }
    Line::from(spans)
}

/// An enumerated selector field with a fixed, closed option set.
#[allow(clippy::too_many_arguments)]
fn selector_line(
    level: usize,
    key: &str,
    value: &str,
    quoted: bool,
    selected: bool,
    icons: IconSet,
    s: &TreeStyles,
    comma: bool,
) -> Line<'static> {
    let rendered = if quoted {
        format!("\"{value}\"")
    } else {
        value.to_string()
    };

    let mut spans = vec![
        indent(level),
        Span::styled(format!("\"{key}\""), s.key),
        Span::styled(": ".to_string(), s.punct),
    ];

    if selected {
        let (left, right) = icons.selector();
        spans.push(Span::styled(left.to_string(), s.selector));
        spans.push(Span::styled(rendered, s.selected));
        spans.push(Span::styled(right.to_string(), s.selector));
    } else {
        let style = if quoted { s.string } else { s.scalar };
        spans.push(Span::styled(rendered, style));
    }
    spans.push(Span::styled(
        if comma { "," } else { "" }.to_string(),
        s.punct,
    ));
    Line::from(spans)
}

fn ellipsize(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    let mut out: String = flat.chars().take(max).collect();
    if flat.chars().count() > max {
        out.push('…');
    }
    out
}
