//! Bordered panel container.
//!
//! Focused panes get the thick border set and the accented title, matching
//! the keyboard focus the footer reports.

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::theme::{BorderSet, Theme};

/// Builder for a panel's outer block.
pub struct Pane<'a> {
    title: Option<&'a str>,
    focused: bool,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            title: None,
            focused: false,
            theme,
            borders,
        }
    }

    /// Set the pane title.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build the styled block; callers render content into its `inner` area.
    pub fn block(&self) -> Block<'a> {
        let (border_set, border_style, title_style) = if self.focused {
            (
                self.borders.focused(),
                Style::default().fg(self.theme.border_focused),
                Style::default().fg(self.theme.primary),
            )
        } else {
            (
                self.borders.normal(),
                Style::default().fg(self.theme.border),
                Style::default().fg(self.theme.subtext),
            )
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(border_style)
            .style(Style::default().bg(self.theme.base));

        if let Some(title) = self.title {
            block = block.title(title).title_style(title_style);
        }
        block
    }
}
