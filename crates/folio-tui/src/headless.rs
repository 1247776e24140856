//! Headless rendering.
//!
//! Renders one frame at a given size into a plain string, without a real
//! terminal. Used by `folio render` and by view tests.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::app::App;
use crate::view;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 100;
pub const DEFAULT_HEIGHT: u16 = 32;

/// Render a single frame of the app and capture it as text.
pub fn render_to_string(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<String, Box<dyn std::error::Error>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| view::draw(frame, app))?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

/// Convert a terminal buffer to a string representation.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}
