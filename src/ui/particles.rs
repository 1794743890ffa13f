//! Turns effect draw commands into terminal output.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Context, Line as Segment},
};

use super::ink;
use crate::effects::{BACKGROUND, DrawCommand, Shape};
use crate::models::{Point, Viewport};

/// Spacing between the parallel strokes that fill a quad.
const STRAND_SPACING: f64 = 0.25;

/// A braille canvas over the whole viewport, painted with the page
/// background and the given quads.
pub fn layer(
    commands: &[DrawCommand],
    viewport: Viewport,
) -> Canvas<'_, impl Fn(&mut Context) + '_> {
    Canvas::default()
        .background_color(ink(BACKGROUND))
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport.width])
        .y_bounds([0.0, viewport.height])
        .paint(move |ctx| {
            for command in commands {
                if let Shape::Quad {
                    center,
                    width,
                    height,
                    rotation,
                } = command.shape
                {
                    let color = ink(command.color);
                    paint_quad(ctx, viewport, center, (width, height), rotation, color);
                }
            }
        })
}

/// Fill a rotated rectangle with strokes running along its height.
fn paint_quad(
    ctx: &mut Context,
    viewport: Viewport,
    center: Point,
    size: (f64, f64),
    rotation: f64,
    color: Color,
) {
    let (width, height) = size;
    let (sin, cos) = rotation.sin_cos();
    let strands = (width / STRAND_SPACING).ceil().max(1.0) as usize;
    let half = (-sin * height / 2.0, cos * height / 2.0);

    for strand in 0..=strands {
        let offset = -width / 2.0 + width * strand as f64 / strands as f64;
        let x = center.x + cos * offset;
        let y = center.y + sin * offset;
        // Canvas y grows upward.
        ctx.draw(&Segment {
            x1: x - half.0,
            y1: viewport.height - (y - half.1),
            x2: x + half.0,
            y2: viewport.height - (y + half.1),
            color,
        });
    }
}

/// Trail dots drawn straight into the buffer so whatever is underneath
/// keeps its background.
pub struct TrailOverlay {
    dots: Vec<DrawCommand>,
}

impl TrailOverlay {
    pub fn new(dots: Vec<DrawCommand>) -> Self {
        Self { dots }
    }
}

fn glyph(diameter: f64) -> &'static str {
    if diameter < 0.45 {
        "·"
    } else if diameter < 0.75 {
        "•"
    } else {
        "●"
    }
}

impl Widget for TrailOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for dot in &self.dots {
            let Shape::Dot { center, diameter } = dot.shape else {
                continue;
            };
            if center.x < 0.0 || center.y < 0.0 {
                continue;
            }
            let x = area.x.saturating_add(center.x as u16);
            let y = area.y.saturating_add(center.y as u16);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph(diameter)).set_fg(ink(dot.color));
            }
        }
    }
}
