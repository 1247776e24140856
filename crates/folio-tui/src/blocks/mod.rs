//! Content blocks for the right panel.
//!
//! The host mounts a fixed, ordered list of block renderers: Intro, Skills,
//! Work, Education, Projects, Contact. Ordering is page order and not
//! data-driven. Every block derives its display independently from the same
//! settings snapshot; expand/collapse state is local to this panel and never
//! part of the settings document.

mod contact;
mod education;
mod intro;
mod projects;
mod skills;
mod work;

use folio_core::{default_expanded, ContentTree, SettingsDocument, Variant};
use ratatui::text::Line;

use crate::theme::{IconSet, Theme};

/// Shared inputs for a block renderer.
pub struct BlockContext<'a> {
    pub doc: &'a ContentTree,
    pub settings: SettingsDocument,
    pub theme: Theme,
    pub icons: IconSet,
    /// Inner width of the panel, for bullet wrapping.
    pub width: u16,
}

impl<'a> BlockContext<'a> {
    /// Build a context for a settings snapshot; the palette follows the
    /// snapshot's `dark_mode`.
    pub fn new(doc: &'a ContentTree, settings: SettingsDocument, icons: IconSet, width: u16) -> Self {
        Self {
            doc,
            settings,
            theme: Theme::for_blocks(settings.dark_mode),
            icons,
            width,
        }
    }
}

/// An expandable entry the panel cursor can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleTarget {
    Work(usize),
    Education(usize),
}

/// Local view state for the block panel.
#[derive(Debug, Clone)]
pub struct BlocksState {
    /// Expand state per work entry, indexed like `ContentTree::work`.
    pub work_expanded: Vec<bool>,
    /// Expand state per education entry.
    pub education_expanded: Vec<bool>,
    /// Work block only: hide entries that are not full-time.
    pub show_only_full_time: bool,
    /// Cursor position within [`toggle_targets`].
    pub selection: usize,
    /// Vertical scroll offset of the whole panel.
    pub scroll: u16,
}

impl BlocksState {
    /// Initial state for a document under the given variant.
    pub fn new(doc: &ContentTree, variant: Variant) -> Self {
        Self {
            work_expanded: default_expanded(&doc.work, variant),
            education_expanded: vec![false; doc.education.len()],
            show_only_full_time: false,
            selection: 0,
            scroll: 0,
        }
    }

    /// Recompute the work defaults after an effective variant change.
    /// Education defaults do not depend on the variant and keep their
    /// manual toggles.
    pub fn reset_work_defaults(&mut self, doc: &ContentTree, variant: Variant) {
        self.work_expanded = default_expanded(&doc.work, variant);
    }

    /// Flip the expand state of a target.
    pub fn toggle(&mut self, target: ToggleTarget) {
        match target {
            ToggleTarget::Work(i) => {
                if let Some(flag) = self.work_expanded.get_mut(i) {
                    *flag = !*flag;
                }
            }
            ToggleTarget::Education(i) => {
                if let Some(flag) = self.education_expanded.get_mut(i) {
                    *flag = !*flag;
                }
            }
        }
    }
}

/// Indices of the work entries the Work block currently shows.
pub fn visible_work(doc: &ContentTree, state: &BlocksState) -> Vec<usize> {
    doc.work
        .iter()
        .enumerate()
        .filter(|(_, e)| !state.show_only_full_time || e.full_time)
        .map(|(i, _)| i)
        .collect()
}

/// The expandable entries currently on screen, in page order.
pub fn toggle_targets(doc: &ContentTree, state: &BlocksState) -> Vec<ToggleTarget> {
    let mut targets: Vec<ToggleTarget> = visible_work(doc, state)
        .into_iter()
        .map(ToggleTarget::Work)
        .collect();
    targets.extend((0..doc.education.len()).map(ToggleTarget::Education));
    targets
}

/// The target under the cursor, if any.
pub fn selected_target(doc: &ContentTree, state: &BlocksState) -> Option<ToggleTarget> {
    toggle_targets(doc, state).get(state.selection).copied()
}

/// Render the full block stack as one column of lines.
pub fn host_lines(ctx: &BlockContext<'_>, state: &BlocksState) -> Vec<Line<'static>> {
    let selected = selected_target(ctx.doc, state);

    let mut lines = Vec::new();
    lines.extend(intro::lines(ctx));
    lines.push(Line::from(Vec::new()));
    lines.extend(skills::lines(ctx));
    lines.push(Line::from(Vec::new()));
    lines.extend(work::lines(ctx, state, selected));
    lines.push(Line::from(Vec::new()));
    lines.extend(education::lines(ctx, state, selected));
    lines.push(Line::from(Vec::new()));
    lines.extend(projects::lines(ctx));
    lines.push(Line::from(Vec::new()));
    lines.extend(contact::lines(ctx));
    lines
}

/// Section heading shared by every block.
fn heading(title: &str, theme: &Theme) -> Line<'static> {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::Span;
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::sample_document;

    fn ctx_with(doc: &ContentTree, settings: SettingsDocument) -> BlockContext<'_> {
        BlockContext::new(doc, settings, IconSet::default(), 60)
    }

    fn all_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_host_orders_blocks_top_to_bottom() {
        let doc = sample_document();
        let state = BlocksState::new(&doc, Variant::Combined);
        let ctx = ctx_with(&doc, SettingsDocument::default());
        let text = all_text(&host_lines(&ctx, &state));

        let order = ["skills", "work", "education", "projects", "contact"];
        let mut last = text.find("Rowan Hale").unwrap();
        for section in order {
            let pos = text.find(&format!("\n{section}")).unwrap();
            assert!(pos > last, "{section} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_full_time_filter_narrows_visible_work() {
        let doc = sample_document();
        let mut state = BlocksState::new(&doc, Variant::Combined);
        assert_eq!(visible_work(&doc, &state).len(), doc.work.len());

        state.show_only_full_time = true;
        let visible = visible_work(&doc, &state);
        assert!(visible.len() < doc.work.len());
        for i in visible {
            assert!(doc.work[i].full_time);
        }
    }

    #[test]
    fn test_toggle_targets_follow_filter() {
        let doc = sample_document();
        let mut state = BlocksState::new(&doc, Variant::Combined);
        let all = toggle_targets(&doc, &state);
        assert_eq!(all.len(), doc.work.len() + doc.education.len());

        state.show_only_full_time = true;
        let filtered = toggle_targets(&doc, &state);
        assert!(filtered.len() < all.len());
        // Education targets survive the work filter.
        assert!(filtered
            .iter()
            .any(|t| matches!(t, ToggleTarget::Education(_))));
    }

    #[test]
    fn test_toggle_flips_state() {
        let doc = sample_document();
        let mut state = BlocksState::new(&doc, Variant::Combined);
        assert!(!state.work_expanded[0]);
        state.toggle(ToggleTarget::Work(0));
        assert!(state.work_expanded[0]);
        state.toggle(ToggleTarget::Work(0));
        assert!(!state.work_expanded[0]);
    }

    #[test]
    fn test_variant_reset_leaves_education_alone() {
        let doc = sample_document();
        let mut state = BlocksState::new(&doc, Variant::Combined);
        state.toggle(ToggleTarget::Education(0));
        state.reset_work_defaults(&doc, Variant::Teacher);
        assert!(state.education_expanded[0]);
        // Work now follows the Teacher defaults.
        assert_eq!(
            state.work_expanded,
            default_expanded(&doc.work, Variant::Teacher)
        );
    }

    #[test]
    fn test_palette_switch_preserves_content() {
        let doc = sample_document();
        let state = BlocksState::new(&doc, Variant::Combined);

        let dark = SettingsDocument::default();
        let light = SettingsDocument {
            dark_mode: false,
            ..dark
        };

        let dark_lines = host_lines(&ctx_with(&doc, dark), &state);
        let light_lines = host_lines(&ctx_with(&doc, light), &state);

        // Same text in both palettes...
        assert_eq!(all_text(&dark_lines), all_text(&light_lines));
        // ...but different styling somewhere.
        let styles = |lines: &[Line<'_>]| {
            lines
                .iter()
                .flat_map(|l| l.spans.iter().map(|s| s.style))
                .collect::<Vec<_>>()
        };
        assert_ne!(styles(&dark_lines), styles(&light_lines));
    }

    #[test]
    fn test_teacher_variant_hides_developer_tags_in_skills() {
        // Variant filtering is scoped to the Skills and Work blocks;
        // Projects always shows its full stack.
        let skills_section = |variant: Variant| {
            let doc = sample_document();
            let state = BlocksState::new(&doc, variant);
            let settings = SettingsDocument {
                variant,
                ..SettingsDocument::default()
            };
            let text = all_text(&host_lines(&ctx_with(&doc, settings), &state));
            let start = text.find("\nskills").unwrap();
            let end = text.find("\nwork").unwrap();
            text[start..end].to_string()
        };

        let teacher = skills_section(Variant::Teacher);
        for tag in folio_core::DEVELOPER_TAGS {
            assert!(!teacher.contains(&format!("#{tag}")), "tag {tag} leaked");
        }
        assert!(teacher.contains("#pedagogy"));

        // Combined restores the full tag set.
        let combined = skills_section(Variant::Combined);
        for tag in folio_core::DEVELOPER_TAGS {
            assert!(combined.contains(&format!("#{tag}")), "tag {tag} missing");
        }
    }
}
