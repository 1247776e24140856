//! Wrapping helpers for block content.

use unicode_width::UnicodeWidthStr;

/// Wrap a plain text string to the specified width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Wrap text with a hanging indent: the first line starts with `lead` and
/// continuation lines are indented to line up under it. Used for highlight
/// bullets and note lists.
pub fn wrap_hanging(text: &str, width: usize, lead: &str) -> Vec<String> {
    let indent = lead.width();
    if width <= indent {
        return vec![format!("{lead}{text}")];
    }

    let mut lines = Vec::new();
    for (i, piece) in wrap_text(text, width - indent).into_iter().enumerate() {
        if i == 0 {
            lines.push(format!("{lead}{piece}"));
        } else {
            lines.push(format!("{}{piece}", " ".repeat(indent)));
        }
    }
    if lines.is_empty() {
        lines.push(lead.to_string());
    }
    lines
}
