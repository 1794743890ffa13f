//! Decorative particle effects.
//!
//! Each effect owns its particles and exposes `update` (one frame of
//! physics) and draw commands the renderer turns into terminal output.
//! None of them feed back into quiz state.

mod color;
mod confetti;
mod streamer;
mod trail;

use rand::Rng;

pub use color::{BACKGROUND, Rgba};
pub use confetti::{ConfettiField, Confetto};
pub use streamer::{Streamer, StreamerField};
pub use trail::{CursorTrail, TRAIL_LENGTH};

use crate::models::{Point, Viewport};

/// What a particle looks like this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled rectangle rotated about its centre (radians).
    Quad {
        center: Point,
        width: f64,
        height: f64,
        rotation: f64,
    },
    /// Round dot.
    Dot { center: Point, diameter: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub shape: Shape,
    pub color: Rgba,
}

/// Pool size for a viewport: one particle per `cells_per_particle`,
/// clamped to `[min, max]`.
pub(crate) fn population(
    viewport: Viewport,
    cells_per_particle: f64,
    min: usize,
    max: usize,
) -> usize {
    let target = (viewport.area() / cells_per_particle).round() as usize;
    target.clamp(min, max)
}

/// Uniform sample in `[low, high)`, tolerating an empty range.
pub(crate) fn uniform(rng: &mut impl Rng, low: f64, high: f64) -> f64 {
    if high > low { rng.gen_range(low..high) } else { low }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_scales_with_viewport() {
        let small = population(Viewport::new(20, 10), 50.0, 20, 400);
        let large = population(Viewport::new(200, 60), 50.0, 20, 400);
        assert_eq!(small, 20);
        assert_eq!(large, 240);
        assert_eq!(population(Viewport::new(1000, 500), 50.0, 20, 400), 400);
    }
}
