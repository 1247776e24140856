//! Split-pane geometry.
//!
//! The two panels plus a one-column divider strip always account for every
//! cell of the split area: `left + divider + right == total` for any ratio
//! and any width. This runs on every pointer move during a drag, so it is
//! plain arithmetic with no allocation.

use ratatui::layout::{Position, Rect};

/// Width of the divider strip in cells.
pub const DIVIDER_WIDTH: u16 = 1;

/// The three regions of the split area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPanes {
    pub left: Rect,
    pub divider: Rect,
    pub right: Rect,
}

impl SplitPanes {
    /// Whether a pointer position is on the divider strip.
    pub fn hit_divider(&self, column: u16, row: u16) -> bool {
        self.divider.contains(Position::new(column, row))
    }

    /// Whether a pointer position is inside the left panel.
    pub fn hit_left(&self, column: u16, row: u16) -> bool {
        self.left.contains(Position::new(column, row))
    }
}

/// Allocate the split area between the two panels.
///
/// The left panel receives `ratio` percent of the cells that remain after
/// the divider strip; the right panel takes the rest.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn split_panes(area: Rect, ratio: f64) -> SplitPanes {
    let total = area.width;
    if total <= DIVIDER_WIDTH {
        // Degenerate area: give everything to the divider.
        return SplitPanes {
            left: Rect::new(area.x, area.y, 0, area.height),
            divider: Rect::new(area.x, area.y, total, area.height),
            right: Rect::new(area.x + total, area.y, 0, area.height),
        };
    }

    let usable = total - DIVIDER_WIDTH;
    let left_width = (ratio / 100.0 * f64::from(usable)).round().max(0.0) as u16;
    let left_width = left_width.min(usable);
    let right_width = usable - left_width;

    SplitPanes {
        left: Rect::new(area.x, area.y, left_width, area.height),
        divider: Rect::new(area.x + left_width, area.y, DIVIDER_WIDTH, area.height),
        right: Rect::new(
            area.x + left_width + DIVIDER_WIDTH,
            area.y,
            right_width,
            area.height,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_always_sum_to_total() {
        for width in [2u16, 3, 10, 80, 81, 120, 239] {
            let area = Rect::new(0, 0, width, 24);
            for ratio in [10.0, 25.0, 33.3, 50.0, 66.7, 75.0, 90.0] {
                let panes = split_panes(area, ratio);
                assert_eq!(
                    panes.left.width + panes.divider.width + panes.right.width,
                    width,
                    "width {width}, ratio {ratio}"
                );
            }
        }
    }

    #[test]
    fn test_regions_are_adjacent() {
        let panes = split_panes(Rect::new(3, 1, 100, 24), 40.0);
        assert_eq!(panes.left.x, 3);
        assert_eq!(panes.divider.x, panes.left.x + panes.left.width);
        assert_eq!(panes.right.x, panes.divider.x + DIVIDER_WIDTH);
    }

    #[test]
    fn test_even_split_at_fifty() {
        // 81 cells: 80 usable, 40/40 around the divider.
        let panes = split_panes(Rect::new(0, 0, 81, 24), 50.0);
        assert_eq!(panes.left.width, 40);
        assert_eq!(panes.right.width, 40);
    }

    #[test]
    fn test_divider_hit_test() {
        let panes = split_panes(Rect::new(0, 0, 81, 24), 50.0);
        assert!(panes.hit_divider(40, 0));
        assert!(panes.hit_divider(40, 23));
        assert!(!panes.hit_divider(39, 5));
        assert!(!panes.hit_divider(41, 5));
        assert!(!panes.hit_divider(40, 24));
    }

    #[test]
    fn test_left_hit_test() {
        let panes = split_panes(Rect::new(0, 0, 81, 24), 50.0);
        assert!(panes.hit_left(0, 0));
        assert!(panes.hit_left(39, 10));
        assert!(!panes.hit_left(40, 10));
    }

    #[test]
    fn test_degenerate_area() {
        let panes = split_panes(Rect::new(0, 0, 1, 24), 50.0);
        assert_eq!(panes.left.width, 0);
        assert_eq!(panes.right.width, 0);
        assert_eq!(panes.divider.width, 1);
    }

    #[test]
    fn test_extreme_ratios_leave_a_sliver() {
        let panes = split_panes(Rect::new(0, 0, 101, 24), 10.0);
        assert_eq!(panes.left.width, 10);
        assert_eq!(panes.right.width, 90);

        let panes = split_panes(Rect::new(0, 0, 101, 24), 90.0);
        assert_eq!(panes.left.width, 90);
        assert_eq!(panes.right.width, 10);
    }
}
