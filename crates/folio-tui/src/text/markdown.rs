//! Markdown rendering for the profile bio.
//!
//! The bio only needs inline formatting, lists, and paragraphs; anything
//! richer (tables, images, html) renders as plain text or is skipped.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::Theme;

/// Render bio markdown to styled ratatui Lines.
pub fn render_markdown(input: &str, theme: &Theme) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(input, Options::empty());
    let mut renderer = BioRenderer::new(theme);
    for event in parser {
        renderer.handle_event(event);
    }
    renderer.flush_line();
    // Drop a trailing paragraph separator.
    if renderer.lines.last().is_some_and(|l| l.spans.is_empty()) {
        renderer.lines.pop();
    }
    renderer.lines
}

struct BioRenderer {
    lines: Vec<Line<'static>>,
    current_spans: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    base: Style,
    strong: Style,
    emphasis: Style,
    link: Style,
    code: Style,
    list_marker: Style,
    in_list: bool,
}

impl BioRenderer {
    fn new(theme: &Theme) -> Self {
        let base = Style::default().fg(theme.text);
        Self {
            lines: Vec::new(),
            current_spans: Vec::new(),
            style_stack: Vec::new(),
            base,
            strong: Style::default().add_modifier(Modifier::BOLD),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            link: Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::UNDERLINED),
            code: Style::default().fg(theme.secondary),
            list_marker: Style::default().fg(theme.primary),
            in_list: false,
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Strong) => self.style_stack.push(self.strong),
            Event::Start(Tag::Emphasis) => self.style_stack.push(self.emphasis),
            Event::Start(Tag::Link { .. }) => self.style_stack.push(self.link),
            Event::End(TagEnd::Strong | TagEnd::Emphasis | TagEnd::Link) => {
                self.style_stack.pop();
            }

            Event::Start(Tag::List(_)) => {
                self.flush_line();
                self.in_list = true;
            }
            Event::End(TagEnd::List(_)) => {
                self.in_list = false;
                self.lines.push(Line::from(Vec::new()));
            }
            Event::Start(Tag::Item) => {
                self.flush_line();
                self.current_spans
                    .push(Span::styled("• ", self.list_marker));
            }
            Event::End(TagEnd::Item) => self.flush_line(),

            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                if !self.in_list {
                    // Blank separator between paragraphs.
                    self.lines.push(Line::from(Vec::new()));
                }
            }

            Event::Text(text) => {
                let style = self.current_style();
                self.current_spans.push(Span::styled(text.into_string(), style));
            }
            Event::Code(code) => {
                self.current_spans
                    .push(Span::styled(format!("`{code}`"), self.code));
            }

            Event::SoftBreak => {
                let style = self.current_style();
                self.current_spans.push(Span::styled(" ".to_string(), style));
            }
            Event::HardBreak => self.flush_line(),

            // Headings, blockquotes, tables and the rest fall through: their
            // text content still arrives via Event::Text.
            _ => {}
        }
    }

    fn current_style(&self) -> Style {
        let mut style = self.base;
        for s in &self.style_stack {
            style = style.patch(*s);
        }
        style
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            let spans = std::mem::take(&mut self.current_spans);
            self.lines.push(Line::from(spans));
        }
    }
}
