//! Skills block.
//!
//! The persona variant filters tags: tags in the opposite persona's set are
//! hidden, and a skill whose tags are all hidden drops out entirely.

use folio_core::{tag_visible, SkillLevel};
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::{heading, BlockContext};

pub fn lines(ctx: &BlockContext<'_>) -> Vec<Line<'static>> {
    let theme = &ctx.theme;
    let variant = ctx.settings.variant;

    let visible: Vec<_> = ctx
        .doc
        .skills
        .iter()
        .filter(|s| s.visible(variant))
        .collect();

    let name_width = visible.iter().map(|s| s.name.width()).max().unwrap_or(0);

    let mut lines = vec![heading("skills", theme)];
    for skill in visible {
        let level_style = match skill.level {
            SkillLevel::Expert => Style::default().fg(theme.success),
            SkillLevel::Proficient => Style::default().fg(theme.text),
            SkillLevel::Familiar => Style::default().fg(theme.subtext),
        };

        let pad = " ".repeat(name_width.saturating_sub(skill.name.width()));
        let mut spans = vec![
            Span::styled(
                format!("  {}{pad}", skill.name),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("  {:<10}", skill.level.label()),
                level_style,
            ),
        ];
        for tag in skill.tags.iter().filter(|t| tag_visible(t, variant)) {
            spans.push(Span::styled(
                format!(" #{tag}"),
                Style::default().fg(theme.secondary),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::IconSet;
    use folio_core::{sample_document, SettingsDocument, Variant, DEVELOPER_TAGS, TEACHER_TAGS};

    fn text_under(variant: Variant) -> String {
        let doc = sample_document();
        let settings = SettingsDocument {
            variant,
            ..SettingsDocument::default()
        };
        let ctx = BlockContext::new(&doc, settings, IconSet::default(), 60);
        lines(&ctx)
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_combined_shows_everything() {
        let text = text_under(Variant::Combined);
        for tag in DEVELOPER_TAGS.iter().chain(TEACHER_TAGS) {
            assert!(text.contains(&format!("#{tag}")));
        }
        assert!(text.contains("Rust"));
        assert!(text.contains("Curriculum design"));
    }

    #[test]
    fn test_teacher_hides_developer_tags_and_dev_only_skills() {
        let text = text_under(Variant::Teacher);
        for tag in DEVELOPER_TAGS {
            assert!(!text.contains(&format!("#{tag}")));
        }
        assert!(!text.contains("Rust"));
        assert!(text.contains("Classroom facilitation"));
        // Untagged skills survive.
        assert!(text.contains("Technical writing"));
    }

    #[test]
    fn test_developer_hides_teacher_tags() {
        let text = text_under(Variant::Developer);
        for tag in TEACHER_TAGS {
            assert!(!text.contains(&format!("#{tag}")));
        }
        assert!(text.contains("Rust"));
        assert!(!text.contains("Formative assessment"));
    }
}
