//! Glyphs and border sets with Unicode/ASCII fallback.
//!
//! ASCII mode is selected automatically when `NO_COLOR` is set or the
//! terminal advertises no UTF-8 locale.

use ratatui::symbols::border;

/// Glyph mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Standard Unicode symbols (default).
    #[default]
    Unicode,
    /// ASCII-only fallback.
    Ascii,
}

impl IconMode {
    /// Detect the mode from the environment.
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::Ascii;
        }
        let utf8 = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .filter_map(|v| std::env::var(v).ok())
            .any(|v| v.to_uppercase().contains("UTF"));
        if utf8 {
            Self::Unicode
        } else {
            Self::Ascii
        }
    }
}

/// Glyph set based on configured mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Marker for an expanded entry.
    pub fn expanded(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "▾",
            IconMode::Ascii => "v",
        }
    }

    /// Marker for a collapsed entry.
    pub fn collapsed(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "▸",
            IconMode::Ascii => ">",
        }
    }

    /// List bullet.
    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "•",
            IconMode::Ascii => "-",
        }
    }

    /// External link marker.
    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "↗",
            IconMode::Ascii => "->",
        }
    }

    /// Selector arrows around an enumerated field.
    pub fn selector(&self) -> (&'static str, &'static str) {
        match self.mode {
            IconMode::Unicode => ("‹ ", " ›"),
            IconMode::Ascii => ("< ", " >"),
        }
    }

    /// Vertical divider bar, normal and while dragging.
    pub fn divider(&self, dragging: bool) -> &'static str {
        match (self.mode, dragging) {
            (IconMode::Unicode, false) => "│",
            (IconMode::Unicode, true) => "┃",
            (IconMode::Ascii, _) => "|",
        }
    }
}

/// Border set matching the glyph mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderSet {
    mode: IconMode,
}

impl BorderSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Normal (unfocused) borders.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            IconMode::Unicode => border::ROUNDED,
            IconMode::Ascii => border::PLAIN,
        }
    }

    /// Focused borders.
    pub fn focused(&self) -> border::Set {
        match self.mode {
            IconMode::Unicode => border::THICK,
            IconMode::Ascii => border::DOUBLE,
        }
    }
}
