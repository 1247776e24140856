//! Work history block.
//!
//! Entries irrelevant to the active variant stay visible but de-emphasized.
//! The full-time filter and the expand state are local to this panel.

use folio_core::WorkEntry;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{heading, visible_work, BlockContext, BlocksState, ToggleTarget};
use crate::text::wrap_hanging;

pub fn lines(
    ctx: &BlockContext<'_>,
    state: &BlocksState,
    selected: Option<ToggleTarget>,
) -> Vec<Line<'static>> {
    let theme = &ctx.theme;
    let variant = ctx.settings.variant;

    let mut lines = Vec::new();
    let mut head = heading("work", theme);
    if state.show_only_full_time {
        head.push_span(Span::styled(
            "  (full-time only)",
            Style::default().fg(theme.muted),
        ));
    }
    lines.push(head);

    for index in visible_work(ctx.doc, state) {
        let entry = &ctx.doc.work[index];
        let expanded = state.work_expanded.get(index).copied().unwrap_or(false);
        let is_selected = selected == Some(ToggleTarget::Work(index));
        let emphasized = entry.emphasized(variant);

        lines.extend(entry_lines(
            ctx, entry, expanded, is_selected, emphasized,
        ));
    }
    lines
}

fn entry_lines(
    ctx: &BlockContext<'_>,
    entry: &WorkEntry,
    expanded: bool,
    selected: bool,
    emphasized: bool,
) -> Vec<Line<'static>> {
    let theme = &ctx.theme;

    let title_fg = if emphasized { theme.text } else { theme.muted };
    let mut title_style = Style::default().fg(title_fg);
    if emphasized {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let mut marker_style = Style::default().fg(theme.primary);
    if selected {
        title_style = title_style.bg(theme.surface);
        marker_style = marker_style.bg(theme.surface);
    }

    let marker = if expanded {
        ctx.icons.expanded()
    } else {
        ctx.icons.collapsed()
    };

    let org_fg = if emphasized { theme.subtext } else { theme.muted };
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("  {marker} "), marker_style),
        Span::styled(entry.title.clone(), title_style),
        Span::styled(
            format!("  {}", entry.organization),
            Style::default().fg(org_fg).bg(if selected {
                theme.surface
            } else {
                theme.base
            }),
        ),
    ])];

    let schedule = if entry.full_time {
        "full-time"
    } else {
        "part-time"
    };
    lines.push(Line::from(Span::styled(
        format!("      {} · {schedule}", entry.period.label()),
        Style::default().fg(theme.muted),
    )));

    if expanded {
        let bullet = format!("      {} ", ctx.icons.bullet());
        let body_fg = if emphasized { theme.text } else { theme.subtext };
        for highlight in &entry.highlights {
            for wrapped in wrap_hanging(highlight, ctx.width as usize, &bullet) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(body_fg),
                )));
            }
        }

        let visible_tags: Vec<_> = entry
            .tags
            .iter()
            .filter(|t| folio_core::tag_visible(t, ctx.settings.variant))
            .collect();
        if !visible_tags.is_empty() {
            let mut spans = vec![Span::raw("     ")];
            for tag in visible_tags {
                spans.push(Span::styled(
                    format!(" #{tag}"),
                    Style::default().fg(theme.secondary),
                ));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}
