//! Catppuccin-based palettes for the two panels.
//!
//! The content blocks switch between [`Theme::dark`] (Mocha) and
//! [`Theme::light`] (Latte) via the `darkMode` setting; the editor panel
//! picks its palette independently from the `editorTheme` setting.

use folio_core::EditorTheme;
use ratatui::style::Color;

/// A full color palette for one panel.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,

    // Split divider
    pub divider: Color,
    pub divider_active: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Catppuccin Mocha (dark) palette.
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244
            overlay: Color::Rgb(69, 71, 90), // #45475a

            // Foregrounds
            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            // Accents
            primary: Color::Rgb(180, 190, 254),   // #b4befe (lavender)
            secondary: Color::Rgb(148, 226, 213), // #94e2d5 (teal)

            // Semantic
            success: Color::Rgb(166, 227, 161), // #a6e3a1 (green)
            warning: Color::Rgb(249, 226, 175), // #f9e2af (yellow)

            // Divider
            divider: Color::Rgb(69, 71, 90), // #45475a
            divider_active: Color::Rgb(180, 190, 254), // #b4befe

            // Borders
            border: Color::Rgb(69, 71, 90), // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }

    /// Catppuccin Latte (light) palette.
    pub fn light() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            overlay: Color::Rgb(220, 224, 232), // #dce0e8

            // Foregrounds
            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            // Accents
            primary: Color::Rgb(114, 135, 253),  // #7287fd (lavender)
            secondary: Color::Rgb(23, 146, 153), // #179299 (teal)

            // Semantic
            success: Color::Rgb(64, 160, 43),  // #40a02b (green)
            warning: Color::Rgb(223, 142, 29), // #df8e1d (yellow)

            // Divider
            divider: Color::Rgb(188, 192, 204), // #bcc0cc
            divider_active: Color::Rgb(114, 135, 253), // #7287fd

            // Borders
            border: Color::Rgb(188, 192, 204), // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd (lavender)
        }
    }

    /// Palette for the content blocks, from the `darkMode` setting.
    pub fn for_blocks(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Palette for the editor panel, from the `editorTheme` setting.
    pub fn for_editor(editor_theme: EditorTheme) -> Self {
        match editor_theme {
            EditorTheme::Dark => Self::dark(),
            EditorTheme::Light => Self::light(),
        }
    }
}
