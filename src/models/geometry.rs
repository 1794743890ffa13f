use ratatui::layout::Rect;

/// A position in viewport units (one unit per terminal cell, y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of the terminal cell at `column`, `row`.
    pub fn cell_center(column: u16, row: u16) -> Self {
        Self::new(f64::from(column) + 0.5, f64::from(row) + 0.5)
    }
}

/// Size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            width: f64::from(columns),
            height: f64::from(rows),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Axis-aligned rectangle used for click and hover detection.
///
/// Edges are snapped to whole cells so the box lines up with what is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl HitBox {
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self {
            left: (center.x - width / 2.0).round(),
            top: (center.y - height / 2.0).round(),
            width: width.round(),
            height: height.round(),
        }
    }

    /// Strict containment: points on the border do not count.
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.left
            && point.x < self.left + self.width
            && point.y > self.top
            && point.y < self.top + self.height
    }

    /// Grow by `columns` on the left and right and `rows` above and below.
    pub fn inflate(&self, columns: f64, rows: f64) -> Self {
        Self {
            left: self.left - columns,
            top: self.top - rows,
            width: self.width + columns * 2.0,
            height: self.height + rows * 2.0,
        }
    }

    /// The cells covered by this box, clipped to `bounds`.
    pub fn cells(&self, bounds: Rect) -> Rect {
        let clamp = |value: f64| value.max(0.0).min(f64::from(u16::MAX)) as u16;
        let (left, top) = (clamp(self.left), clamp(self.top));
        let right = clamp(self.left + self.width);
        let bottom = clamp(self.top + self.height);
        let area = Rect::new(left, top, right - left, bottom - top);
        area.intersection(bounds)
    }
}
