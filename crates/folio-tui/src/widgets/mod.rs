//! Shared widgets for the folio TUI.

mod footer_hints;
mod pane;

pub use footer_hints::{FooterHints, KeyHint};
pub use pane::Pane;
