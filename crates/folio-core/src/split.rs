//! Split ratio math and the divider drag state machine.
//!
//! A drag gesture produces a stream of pointer positions. While the gesture
//! is active only an ephemeral *live* ratio changes, which the layout uses
//! directly; the committed ratio in the settings store is written exactly
//! once, on release. The ratio delta is always computed against the position
//! and ratio captured at gesture start, so intermediate clamping never makes
//! the divider lag the pointer.

use crate::settings::{MAX_SPLIT_RATIO, MIN_SPLIT_RATIO};

/// Clamp a candidate ratio into the allowed range.
///
/// Shared by the drag controller and the numeric field edit path so both
/// entry points agree on the bounds.
pub fn clamp_ratio(value: f64) -> f64 {
    value.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO)
}

/// State captured at the start of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x coordinate at gesture start.
    pub start_pointer_x: f64,
    /// Committed ratio at gesture start.
    pub start_ratio: f64,
}

/// Internal controller state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        session: DragSession,
        live_ratio: f64,
    },
}

/// Converts a pointer-drag gesture into a live split ratio.
///
/// At most one gesture is active at a time; a press while already dragging
/// is ignored, and a release without a prior press is a no-op.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The ephemeral ratio while a gesture is active.
    pub fn live_ratio(&self) -> Option<f64> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { live_ratio, .. } => Some(live_ratio),
        }
    }

    /// Start a gesture from a pointer press on the divider.
    pub fn begin(&mut self, pointer_x: f64, committed_ratio: f64) {
        if self.is_dragging() {
            return;
        }
        let start_ratio = clamp_ratio(committed_ratio);
        self.state = DragState::Dragging {
            session: DragSession {
                start_pointer_x: pointer_x,
                start_ratio,
            },
            live_ratio: start_ratio,
        };
    }

    /// Feed a pointer move. Returns the new live ratio while dragging,
    /// `None` when idle. Does not touch the committed ratio.
    pub fn update(&mut self, pointer_x: f64, container_width: f64) -> Option<f64> {
        let DragState::Dragging { session, live_ratio } = &mut self.state else {
            return None;
        };
        *live_ratio = ratio_at(*session, pointer_x, container_width, *live_ratio);
        Some(*live_ratio)
    }

    /// End the gesture on pointer release. Returns the final ratio for the
    /// caller to commit, or `None` for a stray release with no active drag.
    pub fn release(&mut self, pointer_x: f64, container_width: f64) -> Option<f64> {
        let DragState::Dragging { session, live_ratio } = self.state else {
            return None;
        };
        let final_ratio = ratio_at(session, pointer_x, container_width, live_ratio);
        self.state = DragState::Idle;
        tracing::debug!(final_ratio, "drag released");
        Some(final_ratio)
    }
}

/// Ratio for a pointer position, relative to the gesture start.
///
/// A degenerate container keeps the last known ratio rather than dividing
/// by zero.
fn ratio_at(session: DragSession, pointer_x: f64, container_width: f64, fallback: f64) -> f64 {
    if container_width <= 0.0 {
        return fallback;
    }
    let delta_pct = (pointer_x - session.start_pointer_x) / container_width * 100.0;
    clamp_ratio(session.start_ratio + delta_pct)
}
