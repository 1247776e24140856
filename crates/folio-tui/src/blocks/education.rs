//! Education block. Entries start collapsed and expand to show notes.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{heading, BlockContext, BlocksState, ToggleTarget};
use crate::text::wrap_hanging;

pub fn lines(
    ctx: &BlockContext<'_>,
    state: &BlocksState,
    selected: Option<ToggleTarget>,
) -> Vec<Line<'static>> {
    let theme = &ctx.theme;

    let mut lines = vec![heading("education", theme)];
    for (index, entry) in ctx.doc.education.iter().enumerate() {
        let expanded = state
            .education_expanded
            .get(index)
            .copied()
            .unwrap_or(false);
        let is_selected = selected == Some(ToggleTarget::Education(index));

        let marker = if expanded {
            ctx.icons.expanded()
        } else {
            ctx.icons.collapsed()
        };

        let mut degree_style = Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD);
        let mut marker_style = Style::default().fg(theme.primary);
        if is_selected {
            degree_style = degree_style.bg(theme.surface);
            marker_style = marker_style.bg(theme.surface);
        }

        lines.push(Line::from(vec![
            Span::styled(format!("  {marker} "), marker_style),
            Span::styled(entry.degree.clone(), degree_style),
            Span::styled(
                format!("  {}", entry.institution),
                Style::default().fg(theme.subtext),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", entry.period.label()),
            Style::default().fg(theme.muted),
        )));

        if expanded {
            let bullet = format!("      {} ", ctx.icons.bullet());
            for note in &entry.notes {
                for wrapped in wrap_hanging(note, ctx.width as usize, &bullet) {
                    lines.push(Line::from(Span::styled(
                        wrapped,
                        Style::default().fg(theme.text),
                    )));
                }
            }
        }
    }
    lines
}
