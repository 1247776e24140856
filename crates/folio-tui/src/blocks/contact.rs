//! Contact block.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::{heading, BlockContext};

pub fn lines(ctx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let theme = &ctx.theme;
    let contact = &ctx.doc.contact;

    let mut rows: Vec<(String, String)> = vec![("email".into(), contact.email.clone())];
    if let Some(website) = &contact.website {
        rows.push(("website".into(), website.clone()));
    }
    for link in &contact.links {
        rows.push((link.label.to_lowercase(), link.url.clone()));
    }

    let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

    let mut lines = vec![heading("contact", theme)];
    for (label, value) in rows {
        let pad = " ".repeat(label_width.saturating_sub(label.width()));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {label}{pad}  "),
                Style::default().fg(theme.subtext),
            ),
            Span::styled(value, Style::default().fg(theme.secondary)),
        ]));
    }

    lines.push(Line::from(Span::styled(
        "  [y] copy email".to_string(),
        Style::default().fg(theme.muted),
    )));
    lines
}
