//! Footer status bar.
//!
//! Format: `Document │ Combined │ 50%            [Tab] focus │ [?] help`
//!
//! Left side: focused panel, active variant, committed ratio (or a transient
//! notification when one is pending). Right side: keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "?").
    pub key: String,
    /// The action description (e.g., "focus", "help").
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer status bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    status: Vec<String>,
    notification: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            status: Vec::new(),
            notification: None,
        }
    }

    /// Append a left-side status segment.
    #[must_use]
    pub fn status(mut self, segment: impl Into<String>) -> Self {
        self.status.push(segment.into());
        self
    }

    /// Replace the left side with a transient notification.
    #[must_use]
    pub fn notification(mut self, notification: Option<&'a str>) -> Self {
        self.notification = notification;
        self
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(notification) = self.notification {
            left_spans.push(Span::styled(
                notification.to_string(),
                Style::default().fg(self.theme.warning),
            ));
        } else {
            for (i, segment) in self.status.iter().enumerate() {
                if i > 0 {
                    left_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
                }
                let style = if i == 0 {
                    Style::default().fg(self.theme.primary)
                } else {
                    Style::default().fg(self.theme.subtext)
                };
                left_spans.push(Span::styled(segment.clone(), style));
            }
        }

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.clone(),
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.clone(),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
        let padding = (area.width as usize).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        let paragraph =
            Paragraph::new(Line::from(left_spans)).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_key_hint_creation() {
        let hint = KeyHint::new("Tab", "focus");
        assert_eq!(hint.key, "Tab");
        assert_eq!(hint.action, "focus");
    }

    #[test]
    fn test_renders_status_and_hints() {
        let theme = Theme::dark();
        let hints = vec![KeyHint::new("Tab", "focus"), KeyHint::new("?", "help")];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        FooterHints::new(&hints, &theme)
            .status("Document")
            .status("Combined")
            .render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.contains("Document"));
        assert!(text.contains("Combined"));
        assert!(text.contains("[Tab] focus"));
        assert!(text.contains("[?] help"));
    }

    #[test]
    fn test_notification_replaces_status() {
        let theme = Theme::dark();
        let hints = vec![KeyHint::new("?", "help")];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        FooterHints::new(&hints, &theme)
            .status("Document")
            .notification(Some("Copied email"))
            .render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.contains("Copied email"));
        assert!(!text.contains("Document"));
    }
}
