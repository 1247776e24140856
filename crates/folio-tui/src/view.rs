//! Top-level frame composition.
//!
//! One screen: editor panel, divider strip, block panel, footer. The split
//! geometry is recomputed from the effective ratio on every draw and handed
//! back to the app for mouse hit testing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
    Frame,
};

use crate::app::{App, PanelFocus};
use crate::blocks::{self, BlockContext};
use crate::editor;
use crate::layout::split_panes;
use crate::theme::Theme;
use crate::widgets::{FooterHints, KeyHint, Pane};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 10;

/// Render the whole screen.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Split panes
            Constraint::Length(1), // Footer hints
        ])
        .split(area);

    let panes = split_panes(chunks[0], app.effective_ratio());
    app.remember_layout(panes);

    render_editor_pane(frame, app, panes.left);
    render_divider(frame, app, panes.divider);
    render_blocks_pane(frame, app, panes.right);
    render_footer(frame, app, chunks[1]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_editor_pane(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    if area.width == 0 {
        return;
    }
    let settings = app.store.snapshot();
    let theme = Theme::for_editor(settings.editor_theme);
    let focused = app.focus == PanelFocus::Editor;

    let pane = Pane::new(&theme, &app.borders)
        .title(" document ")
        .focused(focused);
    let block = pane.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = editor::lines(
        &app.document,
        settings,
        &app.editor,
        &theme,
        app.icons,
        focused,
    );

    let max_scroll = lines.len().saturating_sub(inner.height as usize);
    app.editor.scroll = app.editor.scroll.min(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.base))
        .scroll((app.editor.scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn render_divider(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let settings = app.store.snapshot();
    let theme = Theme::for_blocks(settings.dark_mode);
    let dragging = app.drag.is_dragging();

    // Resize affordance: the strip thickens and lights up while dragging.
    let style = if dragging {
        Style::default().fg(theme.divider_active).bg(theme.base)
    } else {
        Style::default().fg(theme.divider).bg(theme.base)
    };
    let symbol = app.icons.divider(dragging);

    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

fn render_blocks_pane(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    if area.width == 0 {
        return;
    }
    let settings = app.store.snapshot();
    let focused = app.focus == PanelFocus::Blocks;

    let ctx = BlockContext::new(
        &app.document,
        settings,
        app.icons,
        area.width.saturating_sub(2),
    );

    let pane = Pane::new(&ctx.theme, &app.borders)
        .title(" portfolio ")
        .focused(focused);
    let block = pane.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = blocks::host_lines(&ctx, &app.blocks);

    let max_scroll = lines.len().saturating_sub(inner.height as usize);
    app.blocks.scroll = app.blocks.scroll.min(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(ctx.theme.base))
        .wrap(Wrap { trim: false })
        .scroll((app.blocks.scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn render_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let settings = app.store.snapshot();
    let theme = Theme::for_blocks(settings.dark_mode);

    let hints = vec![
        KeyHint::new("Tab", "focus"),
        KeyHint::new("d", "dark"),
        KeyHint::new("v", "variant"),
        KeyHint::new("f", "full-time"),
        KeyHint::new("?", "help"),
        KeyHint::new("q", "quit"),
    ];

    let panel = match app.focus {
        PanelFocus::Editor => "Document",
        PanelFocus::Blocks => "Portfolio",
    };

    let footer = FooterHints::new(&hints, &theme)
        .status(panel)
        .status(settings.variant.label())
        .status(format!("{}%", editor::format_ratio(app.effective_ratio())))
        .notification(app.notification.as_deref());
    frame.render_widget(footer, area);
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect) {
    let msg = format!("Terminal too small (min {MIN_WIDTH}x{MIN_HEIGHT})");
    frame.render_widget(Paragraph::new(msg), area);
}

/// Keybinding help, drawn over the split.
fn render_help_overlay(frame: &mut Frame<'_>, area: Rect) {
    let theme = Theme::dark();
    let popup = centered_rect(52, 16, area);

    frame.render_widget(Clear, popup);

    let title = Span::styled(
        " help ",
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    let block = ratatui::widgets::Block::default()
        .title(title)
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(popup);
    block.render(popup, frame.buffer_mut());

    let entry = |key: &str, action: &str| {
        Line::from(vec![
            Span::styled(
                format!("  {key:<12}"),
                Style::default().fg(theme.primary),
            ),
            Span::styled(action.to_string(), Style::default().fg(theme.text)),
        ])
    };

    let lines = vec![
        entry("mouse drag", "resize the split on the divider"),
        entry("Tab", "switch panel focus"),
        entry("Up/Down", "select field / move cursor"),
        entry("Left/Right", "edit the selected field"),
        entry("0-9", "type a split ratio (10-90)"),
        entry("Enter", "toggle / expand entry"),
        entry("d", "toggle dark mode"),
        entry("t", "toggle editor theme"),
        entry("v", "cycle variant"),
        entry("f", "work: full-time only"),
        entry("y", "copy contact email"),
        entry("q / Ctrl+C", "quit"),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// A centered rectangle of the given size, clamped to the area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
