//! Projects block.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{heading, BlockContext};
use crate::text::wrap_hanging;

pub fn lines(ctx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let theme = &ctx.theme;

    let mut lines = vec![heading("projects", theme)];
    for project in &ctx.doc.projects {
        let mut spans = vec![Span::styled(
            format!("  {}", project.name),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )];
        for tag in &project.tags {
            spans.push(Span::styled(
                format!(" #{tag}"),
                Style::default().fg(theme.secondary),
            ));
        }
        lines.push(Line::from(spans));

        for wrapped in wrap_hanging(&project.summary, ctx.width as usize, "    ") {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(theme.subtext),
            )));
        }

        if let Some(link) = &project.link {
            lines.push(Line::from(Span::styled(
                format!("    {} {link}", ctx.icons.link()),
                Style::default().fg(theme.muted),
            )));
        }
    }
    lines
}
