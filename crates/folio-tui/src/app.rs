//! Application state and update logic for the folio TUI.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::{ContentTree, DragController, SettingsDocument, SettingsStore, SettingsUpdate};

use crate::blocks::{selected_target, toggle_targets, BlocksState};
use crate::editor::{EditorField, EditorState};
use crate::event::Action;
use crate::layout::SplitPanes;
use crate::theme::{BorderSet, IconMode, IconSet};

/// Lines scrolled per wheel notch.
const SCROLL_STEP: u16 = 2;

/// Which panel owns keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    #[default]
    Editor,
    Blocks,
}

/// Application state.
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Panel with keyboard focus.
    pub focus: PanelFocus,

    /// The shared settings document; the only write path for it.
    pub store: SettingsStore,

    /// The read-only portfolio content.
    pub document: ContentTree,

    /// Divider drag state machine.
    pub drag: DragController,

    /// Editor panel state.
    pub editor: EditorState,

    /// Block panel state (expansion, filter, cursor, scroll).
    pub blocks: BlocksState,

    /// Glyph set for the detected terminal capabilities.
    pub icons: IconSet,

    /// Border set matching the glyph mode.
    pub borders: BorderSet,

    /// Notification message (displayed temporarily, cleared after some ticks).
    pub notification: Option<String>,

    /// Ticks remaining until notification is cleared.
    notification_ttl: usize,

    /// Split geometry from the last render, for mouse hit testing.
    layout: Option<SplitPanes>,
}

impl App {
    /// Create a new app instance.
    pub fn new(document: ContentTree, settings: SettingsDocument) -> Self {
        let store = SettingsStore::new(settings);
        let blocks = BlocksState::new(&document, store.snapshot().variant);
        let mode = IconMode::detect();

        Self {
            should_quit: false,
            show_help: false,
            focus: PanelFocus::Editor,
            store,
            document,
            drag: DragController::new(),
            editor: EditorState::new(),
            blocks,
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            notification: None,
            notification_ttl: 0,
            layout: None,
        }
    }

    /// The ratio the layout should use right now: the ephemeral live ratio
    /// during a drag, the committed one otherwise.
    pub fn effective_ratio(&self) -> f64 {
        self.drag
            .live_ratio()
            .unwrap_or_else(|| self.store.snapshot().split_ratio)
    }

    /// Record the split geometry of the frame that was just drawn.
    pub fn remember_layout(&mut self, panes: SplitPanes) {
        self.layout = Some(panes);
    }

    /// The single mutation entry point above the store: forwards the write
    /// and refreshes derived view state on effective changes.
    pub fn apply_update(&mut self, update: SettingsUpdate) -> bool {
        let changed = self.store.apply(update);
        if changed {
            if let SettingsUpdate::Variant(variant) = update {
                self.blocks.reset_work_defaults(&self.document, variant);
            }
        }
        changed
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::Back => {
                if !self.editor.ratio_input.is_empty() {
                    self.editor.ratio_input.clear();
                } else {
                    self.should_quit = true;
                }
            }
            Action::FocusNext => {
                self.focus = match self.focus {
                    PanelFocus::Editor => PanelFocus::Blocks,
                    PanelFocus::Blocks => PanelFocus::Editor,
                };
            }
            Action::ToggleDarkMode => {
                let dark = self.store.snapshot().dark_mode;
                self.apply_update(SettingsUpdate::DarkMode(!dark));
            }
            Action::ToggleEditorTheme => {
                let theme = self.store.snapshot().editor_theme;
                self.apply_update(SettingsUpdate::EditorTheme(theme.cycled()));
            }
            Action::CycleVariant => {
                let variant = self.store.snapshot().variant;
                self.apply_update(SettingsUpdate::Variant(variant.cycled()));
            }
            Action::ToggleFullTime => {
                self.blocks.show_only_full_time = !self.blocks.show_only_full_time;
                self.clamp_block_selection();
            }
            Action::CopyEmail => self.copy_email(),
            Action::Up | Action::Down | Action::Left | Action::Right | Action::Select => {
                match self.focus {
                    PanelFocus::Editor => self.handle_editor_action(action),
                    PanelFocus::Blocks => self.handle_blocks_action(action),
                }
            }
            Action::Quit | Action::Help | Action::None => {}
        }
    }

    // === Editor panel ===

    fn handle_editor_action(&mut self, action: Action) {
        match action {
            Action::Up => self.editor.select_prev(),
            Action::Down => self.editor.select_next(),
            Action::Left => self.edit_selected_field(false),
            Action::Right | Action::Select => self.edit_selected_field(true),
            _ => {}
        }
    }

    /// Apply a Left/Right/Enter edit to the selected field. For the closed
    /// selectors both directions advance the cycle; for the numeric ratio
    /// field the arrows nudge by one point, sharing the drag clamp.
    fn edit_selected_field(&mut self, forward: bool) {
        let settings = self.store.snapshot();
        match self.editor.selected {
            EditorField::SplitRatio => {
                let step = if forward { 1.0 } else { -1.0 };
                self.editor.ratio_input.clear();
                self.apply_update(SettingsUpdate::SplitRatio(settings.split_ratio + step));
            }
            EditorField::DarkMode => {
                self.apply_update(SettingsUpdate::DarkMode(!settings.dark_mode));
            }
            EditorField::EditorTheme => {
                self.apply_update(SettingsUpdate::EditorTheme(settings.editor_theme.cycled()));
            }
            EditorField::Variant => {
                self.apply_update(SettingsUpdate::Variant(settings.variant.cycled()));
            }
        }
    }

    /// Feed a character into the numeric ratio field. Returns `true` when
    /// the key was consumed. Each buffer change that parses commits
    /// immediately, so the split moves as the user types.
    pub fn editor_input(&mut self, ch: char) -> bool {
        if self.focus != PanelFocus::Editor || self.editor.selected != EditorField::SplitRatio {
            return false;
        }
        match self.editor.ratio_input.insert(ch) {
            Some(value) => {
                self.apply_update(SettingsUpdate::SplitRatio(value));
                true
            }
            None => ch.is_ascii_digit() || ch == '.',
        }
    }

    /// Backspace in the numeric ratio field. Returns `true` when consumed.
    pub fn editor_backspace(&mut self) -> bool {
        if self.focus != PanelFocus::Editor || self.editor.selected != EditorField::SplitRatio {
            return false;
        }
        if let Some(value) = self.editor.ratio_input.backspace() {
            self.apply_update(SettingsUpdate::SplitRatio(value));
        }
        true
    }

    // === Block panel ===

    fn handle_blocks_action(&mut self, action: Action) {
        match action {
            Action::Up => {
                self.blocks.selection = self.blocks.selection.saturating_sub(1);
            }
            Action::Down => {
                let max = toggle_targets(&self.document, &self.blocks)
                    .len()
                    .saturating_sub(1);
                if self.blocks.selection < max {
                    self.blocks.selection += 1;
                }
            }
            Action::Select => {
                if let Some(target) = selected_target(&self.document, &self.blocks) {
                    self.blocks.toggle(target);
                }
            }
            _ => {}
        }
    }

    fn clamp_block_selection(&mut self) {
        let max = toggle_targets(&self.document, &self.blocks)
            .len()
            .saturating_sub(1);
        self.blocks.selection = self.blocks.selection.min(max);
    }

    // === Mouse ===

    /// Dispatch a mouse event against the last rendered layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(panes) = self.layout else {
            return;
        };
        let container_width =
            f64::from(panes.left.width + panes.divider.width + panes.right.width);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if panes.hit_divider(mouse.column, mouse.row) {
                    // A drag supersedes any half-typed ratio.
                    self.editor.ratio_input.clear();
                    self.drag
                        .begin(f64::from(mouse.column), self.store.snapshot().split_ratio);
                } else if panes.hit_left(mouse.column, mouse.row) {
                    self.focus = PanelFocus::Editor;
                } else {
                    self.focus = PanelFocus::Blocks;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // Live ratio only; the store is untouched until release.
                self.drag.update(f64::from(mouse.column), container_width);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // Release anywhere ends the gesture with exactly one commit.
                if let Some(ratio) = self.drag.release(f64::from(mouse.column), container_width) {
                    self.apply_update(SettingsUpdate::SplitRatio(ratio));
                }
            }
            MouseEventKind::ScrollUp => self.scroll_panel_at(mouse.column, mouse.row, true),
            MouseEventKind::ScrollDown => self.scroll_panel_at(mouse.column, mouse.row, false),
            _ => {}
        }
    }

    fn scroll_panel_at(&mut self, column: u16, row: u16, up: bool) {
        let Some(panes) = self.layout else {
            return;
        };
        let scroll = if panes.hit_left(column, row) {
            &mut self.editor.scroll
        } else if panes.hit_divider(column, row) {
            return;
        } else {
            &mut self.blocks.scroll
        };
        *scroll = if up {
            scroll.saturating_sub(SCROLL_STEP)
        } else {
            scroll.saturating_add(SCROLL_STEP)
        };
    }

    // === Misc ===

    /// Copy the contact email to the system clipboard.
    fn copy_email(&mut self) {
        let email = self.document.contact.email.clone();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(email)) {
            Ok(()) => self.set_notification("Email copied to clipboard".to_string()),
            Err(e) => self.set_notification(format!("Copy failed: {e}")),
        }
    }

    /// Set a temporary notification message.
    fn set_notification(&mut self, msg: String) {
        self.notification = Some(msg);
        // Display for ~3 seconds at 4 Hz tick rate (250ms) = 12 ticks
        self.notification_ttl = 12;
    }

    /// Update time-based state.
    pub fn tick(&mut self) {
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::split_panes;
    use crossterm::event::KeyModifiers;
    use folio_core::{sample_document, Variant};
    use ratatui::layout::Rect;

    fn test_app() -> App {
        let mut app = App::new(sample_document(), SettingsDocument::default());
        app.icons = IconSet::new(IconMode::Unicode);
        app.borders = BorderSet::new(IconMode::Unicode);
        app
    }

    fn app_with_layout(width: u16) -> App {
        let mut app = test_app();
        let panes = split_panes(Rect::new(0, 0, width, 24), app.effective_ratio());
        app.remember_layout(panes);
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_drag_commits_once_on_release() {
        // 121 cells: 120 usable, divider at column 60 for ratio 50.
        let mut app = app_with_layout(121);
        let base_revision = app.store.revision();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 60, 5));
        assert!(app.drag.is_dragging());

        // +12.1 columns of 121 total is +10 points.
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 72, 5));
        let live = app.effective_ratio();
        assert!((live - 59.917).abs() < 0.01, "live {live}");
        // Transient only: nothing committed yet.
        assert_eq!(app.store.revision(), base_revision);
        assert!((app.store.snapshot().split_ratio - 50.0).abs() < f64::EPSILON);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 72, 5));
        assert!(!app.drag.is_dragging());
        assert_eq!(app.store.revision(), base_revision + 1);
        assert!((app.store.snapshot().split_ratio - live).abs() < 1e-9);
    }

    #[test]
    fn test_press_off_divider_moves_focus_not_drag() {
        let mut app = app_with_layout(121);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert!(!app.drag.is_dragging());
        assert_eq!(app.focus, PanelFocus::Editor);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 100, 5));
        assert_eq!(app.focus, PanelFocus::Blocks);
    }

    #[test]
    fn test_stray_release_commits_nothing() {
        let mut app = app_with_layout(121);
        let revision = app.store.revision();
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 5));
        assert_eq!(app.store.revision(), revision);
    }

    #[test]
    fn test_typing_five_commits_clamped_ten() {
        let mut app = test_app();
        assert!(app.editor_input('5'));
        assert!((app.store.snapshot().split_ratio - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_typing_builds_multi_digit_values() {
        let mut app = test_app();
        app.editor_input('6');
        app.editor_input('5');
        assert!((app.store.snapshot().split_ratio - 65.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_typing_ignored_when_other_field_selected() {
        let mut app = test_app();
        app.editor.selected = EditorField::Variant;
        assert!(!app.editor_input('5'));
        assert!((app.store.snapshot().split_ratio - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_arrow_edits_on_selector_fields() {
        let mut app = test_app();
        app.editor.selected = EditorField::Variant;
        app.handle_action(Action::Right);
        assert_eq!(app.store.snapshot().variant, Variant::Teacher);

        app.editor.selected = EditorField::DarkMode;
        app.handle_action(Action::Select);
        assert!(!app.store.snapshot().dark_mode);
    }

    #[test]
    fn test_ratio_arrows_nudge_within_bounds() {
        let mut app = test_app();
        app.handle_action(Action::Right);
        assert!((app.store.snapshot().split_ratio - 51.0).abs() < f64::EPSILON);
        app.handle_action(Action::Left);
        app.handle_action(Action::Left);
        assert!((app.store.snapshot().split_ratio - 49.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_variant_change_resets_work_expansion() {
        let mut app = test_app();
        app.blocks.work_expanded[0] = true;
        app.handle_action(Action::CycleVariant);
        assert_eq!(app.store.snapshot().variant, Variant::Teacher);
        assert_eq!(
            app.blocks.work_expanded,
            folio_core::default_expanded(&app.document.work, Variant::Teacher)
        );
    }

    #[test]
    fn test_idempotent_update_keeps_toggles() {
        let mut app = test_app();
        app.blocks.work_expanded[0] = true;
        let variant = app.store.snapshot().variant;
        assert!(!app.apply_update(SettingsUpdate::Variant(variant)));
        assert!(app.blocks.work_expanded[0]);
    }

    #[test]
    fn test_dark_mode_toggle_leaves_blocks_state_alone() {
        let mut app = test_app();
        app.blocks.work_expanded[1] = true;
        app.blocks.show_only_full_time = true;
        app.blocks.selection = 2;

        app.handle_action(Action::ToggleDarkMode);
        assert!(!app.store.snapshot().dark_mode);
        assert!(app.blocks.work_expanded[1]);
        assert!(app.blocks.show_only_full_time);
        assert_eq!(app.blocks.selection, 2);
    }

    #[test]
    fn test_full_time_filter_clamps_selection() {
        let mut app = test_app();
        let all = toggle_targets(&app.document, &app.blocks).len();
        app.blocks.selection = all - 1;
        app.handle_action(Action::ToggleFullTime);
        let filtered = toggle_targets(&app.document, &app.blocks).len();
        assert!(app.blocks.selection < filtered);
    }

    #[test]
    fn test_blocks_select_toggles_entry() {
        let mut app = test_app();
        app.focus = PanelFocus::Blocks;
        app.handle_action(Action::Select);
        assert!(app.blocks.work_expanded[0]);
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = test_app();
        assert_eq!(app.focus, PanelFocus::Editor);
        app.handle_action(Action::FocusNext);
        assert_eq!(app.focus, PanelFocus::Blocks);
        app.handle_action(Action::FocusNext);
        assert_eq!(app.focus, PanelFocus::Editor);
    }

    #[test]
    fn test_help_closes_before_quit() {
        let mut app = test_app();
        app.show_help = true;
        app.handle_action(Action::Quit);
        assert!(!app.show_help);
        assert!(!app.should_quit);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_back_clears_ratio_buffer_before_quitting() {
        let mut app = test_app();
        app.editor_input('4');
        app.handle_action(Action::Back);
        assert!(app.editor.ratio_input.is_empty());
        assert!(!app.should_quit);
        app.handle_action(Action::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_routes_to_hovered_panel() {
        let mut app = app_with_layout(121);
        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 5));
        assert_eq!(app.editor.scroll, SCROLL_STEP);
        assert_eq!(app.blocks.scroll, 0);

        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 100, 5));
        assert_eq!(app.blocks.scroll, SCROLL_STEP);

        app.handle_mouse(mouse(MouseEventKind::ScrollUp, 100, 5));
        assert_eq!(app.blocks.scroll, 0);
    }

    #[test]
    fn test_mouse_ignored_before_first_render() {
        let mut app = test_app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 60, 5));
        assert!(!app.drag.is_dragging());
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let mut app = test_app();
        app.set_notification("hello".to_string());
        assert!(app.notification.is_some());
        for _ in 0..12 {
            app.tick();
        }
        assert!(app.notification.is_none());
    }
}
