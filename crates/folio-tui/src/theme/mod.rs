//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palettes (Catppuccin Mocha/Latte)
//! - [`IconSet`] - Glyphs with Unicode/ASCII modes
//! - [`BorderSet`] - Border characters with ASCII fallback

mod colors;
mod glyphs;

pub use colors::Theme;
pub use glyphs::{BorderSet, IconMode, IconSet};
