//! Intro block: name, headline, location, and the markdown bio.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::BlockContext;
use crate::text::render_markdown;

pub fn lines(ctx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let profile = &ctx.doc.profile;
    let theme = &ctx.theme;

    let mut lines = vec![Line::from(Span::styled(
        profile.name.clone(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))];

    let mut subtitle = vec![Span::styled(
        profile.headline.clone(),
        Style::default().fg(theme.subtext),
    )];
    if let Some(location) = &profile.location {
        subtitle.push(Span::styled(
            format!("  ·  {location}"),
            Style::default().fg(theme.muted),
        ));
    }
    lines.push(Line::from(subtitle));
    lines.push(Line::from(Vec::new()));

    lines.extend(render_markdown(&profile.bio, theme));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::IconSet;
    use folio_core::{sample_document, SettingsDocument};

    #[test]
    fn test_intro_shows_identity_and_bio() {
        let doc = sample_document();
        let ctx = BlockContext::new(&doc, SettingsDocument::default(), IconSet::default(), 60);
        let text: String = lines(&ctx)
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Rowan Hale"));
        assert!(text.contains("Leeds"));
        assert!(text.contains("backend services"));
        // Markdown markers are consumed, not shown.
        assert!(!text.contains("**"));
    }
}
