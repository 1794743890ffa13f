use std::collections::VecDeque;

use super::{DrawCommand, Rgba, Shape};
use crate::models::{GameState, Point};

/// Number of pointer samples kept, one per frame.
pub const TRAIL_LENGTH: usize = 25;

const MIN_DIAMETER: f64 = 0.2;
const MAX_DIAMETER: f64 = 1.0;
const MAX_ALPHA: f64 = 150.0;
const HUE_PER_FRAME: u64 = 5;
const HUE_PER_POINT: u64 = 10;

/// Linear map of `value` from `[0, TRAIL_LENGTH]` onto `[low, high]`.
fn by_age(value: usize, low: f64, high: f64) -> f64 {
    low + (high - low) * value as f64 / TRAIL_LENGTH as f64
}

/// Rainbow comet following the pointer on the interactive screens.
#[derive(Debug)]
pub struct CursorTrail {
    /// Oldest first.
    points: VecDeque<Point>,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the pointer for this frame.
    ///
    /// The trail is emptied whenever the screen does not show it or the
    /// pointer is over something clickable.
    pub fn update(&mut self, state: GameState, hovering: bool, pointer: Option<Point>) {
        if !state.shows_trail() || hovering {
            self.points.clear();
            return;
        }
        let Some(pointer) = pointer else {
            return;
        };
        self.points.push_back(pointer);
        if self.points.len() > TRAIL_LENGTH {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Newer points are larger and more opaque; hue cycles with time and
    /// position along the trail.
    pub fn draw_commands(&self, frame: u64) -> impl Iterator<Item = DrawCommand> + '_ {
        self.points.iter().enumerate().map(move |(i, &center)| {
            let hue = (frame * HUE_PER_FRAME + i as u64 * HUE_PER_POINT) % 360;
            let alpha = by_age(i, 0.0, MAX_ALPHA).round() as u8;
            DrawCommand {
                shape: Shape::Dot {
                    center,
                    diameter: by_age(i, MIN_DIAMETER, MAX_DIAMETER),
                },
                color: Rgba::from_hsb(hue as f64, 90.0, 90.0).with_alpha(alpha),
            }
        })
    }
}
