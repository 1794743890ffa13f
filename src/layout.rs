//! Screen geometry, recomputed from the viewport every frame.

use crate::models::{HitBox, Point, Viewport};

const START_BUTTON_WIDTH: f64 = 24.0;
const BUTTON_HEIGHT: f64 = 3.0;
const OPTION_WIDTH: f64 = 60.0;
/// Vertical distance between option centres. Larger than the box height,
/// so options never overlap.
const OPTION_SPACING: f64 = 4.0;
const SIDE_MARGIN: f64 = 4.0;

#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    viewport: Viewport,
}

impl ScreenLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    fn center_x(&self) -> f64 {
        (self.viewport.width / 2.0).floor()
    }

    fn row(&self, fraction: f64) -> f64 {
        (self.viewport.height * fraction).floor()
    }

    fn box_width(&self, preferred: f64) -> f64 {
        preferred.min(self.viewport.width - SIDE_MARGIN).max(1.0)
    }

    pub fn title_row(&self) -> f64 {
        self.row(0.25)
    }

    pub fn subtitle_row(&self) -> f64 {
        self.title_row() + 2.0
    }

    pub fn start_button(&self) -> HitBox {
        HitBox::centered(
            Point::new(self.center_x(), self.row(0.6) + 0.5),
            self.box_width(START_BUTTON_WIDTH),
            BUTTON_HEIGHT,
        )
    }

    pub fn progress_row(&self) -> f64 {
        self.row(0.1)
    }

    pub fn prompt_row(&self) -> f64 {
        self.row(0.25)
    }

    /// Width available to the prompt text.
    pub fn prompt_width(&self) -> f64 {
        self.box_width(OPTION_WIDTH)
    }

    pub fn option_box(&self, index: usize) -> HitBox {
        let y = self.prompt_row() + 4.5 + index as f64 * OPTION_SPACING;
        HitBox::centered(
            Point::new(self.center_x(), y),
            self.box_width(OPTION_WIDTH),
            BUTTON_HEIGHT,
        )
    }

    /// Hit boxes for `count` options in display order.
    pub fn option_boxes(&self, count: usize) -> impl Iterator<Item = HitBox> + '_ {
        (0..count).map(|index| self.option_box(index))
    }

    /// First option under `point`, in display order.
    pub fn option_at(&self, count: usize, point: Point) -> Option<usize> {
        self.option_boxes(count)
            .position(|hit_box| hit_box.contains(point))
    }

    pub fn score_row(&self) -> f64 {
        self.title_row() + 3.0
    }

    pub fn verdict_row(&self) -> f64 {
        self.row(0.5)
    }

    pub fn error_row(&self) -> f64 {
        self.row(0.5) - 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NUM_OPTIONS;

    fn overlaps(a: &HitBox, b: &HitBox) -> bool {
        a.left < b.left + b.width
            && b.left < a.left + a.width
            && a.top < b.top + b.height
            && b.top < a.top + a.height
    }

    #[test]
    fn start_button_is_centered() {
        let layout = ScreenLayout::new(Viewport::new(80, 30));
        let button = layout.start_button();
        assert_eq!(button.left, 28.0);
        assert_eq!(button.top, 17.0);
        assert_eq!(button.width, 24.0);
        assert!(button.contains(Point::cell_center(40, 18)));
        assert!(!button.contains(Point::cell_center(40, 20)));
    }

    #[test]
    fn options_never_overlap() {
        for (columns, rows) in [(80, 24), (40, 12), (200, 60)] {
            let layout = ScreenLayout::new(Viewport::new(columns, rows));
            let boxes: Vec<HitBox> = layout.option_boxes(NUM_OPTIONS).collect();
            for (i, a) in boxes.iter().enumerate() {
                for b in &boxes[i + 1..] {
                    assert!(!overlaps(a, b));
                }
            }
        }
    }

    #[test]
    fn option_hit_in_display_order() {
        let layout = ScreenLayout::new(Viewport::new(100, 40));
        for index in 0..NUM_OPTIONS {
            let hit_box = layout.option_box(index);
            let inside = Point::new(hit_box.left + 1.5, hit_box.top + 1.5);
            assert_eq!(layout.option_at(NUM_OPTIONS, inside), Some(index));
        }
        assert_eq!(layout.option_at(NUM_OPTIONS, Point::new(0.5, 0.5)), None);
    }

    #[test]
    fn narrow_viewport_shrinks_boxes() {
        let layout = ScreenLayout::new(Viewport::new(30, 20));
        assert_eq!(layout.option_box(0).width, 26.0);
        assert_eq!(layout.start_button().width, 24.0);
    }
}
