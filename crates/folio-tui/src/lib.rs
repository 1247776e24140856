//! folio-tui: Terminal UI for the folio portfolio viewer
//!
//! This crate provides the terminal layer for folio, including:
//! - The split-pane screen with a mouse-draggable divider
//! - The live document editor panel and the content block panel
//! - Headless rendering for the CLI and for tests

pub mod app;
pub mod blocks;
pub mod editor;
mod event;
pub mod headless;
pub mod layout;
#[cfg(test)]
pub mod test_utils;
mod text;
pub mod theme;
mod view;
mod widgets;

pub use app::{App, PanelFocus};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use folio_core;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{ContentTree, SettingsDocument};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal with
/// mouse capture, runs the event loop, and restores the terminal on exit.
pub async fn run_tui(
    document: ContentTree,
    settings: SettingsDocument,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(document, settings);

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Draw; this also refreshes the layout used for mouse hit testing.
        terminal.draw(|frame| view::draw(frame, app))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    // The numeric ratio field sees raw characters first;
                    // unconsumed keys fall through to the action map.
                    let consumed = match key.code {
                        KeyCode::Char(c) if key.modifiers.is_empty() => app.editor_input(c),
                        KeyCode::Backspace => app.editor_backspace(),
                        _ => false,
                    };
                    if !consumed {
                        app.handle_action(key_to_action(key));
                    }
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::Tick => {
                    app.tick();
                }
                Event::Resize(_, _) => {
                    // Next draw recomputes the split from the new area.
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
