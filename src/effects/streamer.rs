use std::f64::consts::TAU;

use rand::Rng;

use super::{DrawCommand, Rgba, Shape, population, uniform};
use crate::models::{Point, Viewport};

const CELLS_PER_STREAMER: f64 = 50.0;
const MIN_STREAMERS: usize = 20;
const MAX_STREAMERS: usize = 400;

const WIDTH: (f64, f64) = (0.4, 0.9);
const LENGTH: (f64, f64) = (1.5, 3.0);
const SPEED: (f64, f64) = (0.2, 0.5);
const WOBBLE_AMPLITUDE: f64 = 0.15;
const WOBBLE_STEP: f64 = 0.02;
const MAX_ROTATION_SPEED: f64 = 0.05;
/// Recycled streamers re-enter from at most this fraction of the height
/// above the top edge.
const RECYCLE_BAND: f64 = 0.2;

/// A falling ribbon that sways as it drops.
#[derive(Debug, Clone)]
pub struct Streamer {
    pub position: Point,
    pub width: f64,
    pub length: f64,
    pub speed: f64,
    pub wobble: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub color: Rgba,
}

impl Streamer {
    /// A streamer somewhere in the band above the viewport.
    pub fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut streamer = Self {
            position: Point::default(),
            width: 0.0,
            length: 0.0,
            speed: 0.0,
            wobble: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            color: Rgba::from_hsb(uniform(rng, 0.0, 360.0), 80.0, 90.0),
        };
        streamer.reset(viewport, rng);
        streamer.position.y = uniform(rng, -viewport.height, 0.0);
        streamer
    }

    /// Re-randomize everything except colour and place above the top edge.
    fn reset(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        let band = (viewport.height * RECYCLE_BAND).max(1.0);
        self.position = Point::new(uniform(rng, 0.0, viewport.width), uniform(rng, -band, 0.0));
        self.width = uniform(rng, WIDTH.0, WIDTH.1);
        self.length = uniform(rng, LENGTH.0, LENGTH.1);
        self.speed = uniform(rng, SPEED.0, SPEED.1);
        self.wobble = uniform(rng, 0.0, 100.0);
        self.rotation = uniform(rng, 0.0, TAU);
        self.rotation_speed = uniform(rng, -MAX_ROTATION_SPEED, MAX_ROTATION_SPEED);
    }

    pub fn update(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.position.y += self.speed;
        self.position.x += self.wobble.sin() * WOBBLE_AMPLITUDE;
        self.wobble += WOBBLE_STEP;
        self.rotation += self.rotation_speed;

        if self.position.y > viewport.height {
            self.reset(viewport, rng);
        }
    }

    pub fn display(&self) -> DrawCommand {
        DrawCommand {
            shape: Shape::Quad {
                center: self.position,
                width: self.width,
                height: self.length,
                rotation: self.rotation,
            },
            color: self.color,
        }
    }
}

/// The perpetual rain of streamers behind the result screen.
#[derive(Debug, Default)]
pub struct StreamerField {
    streamers: Vec<Streamer>,
}

impl StreamerField {
    pub fn new(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut field = Self::default();
        field.fit(viewport, rng);
        field
    }

    /// Resize the pool to the population target for `viewport`.
    pub fn fit(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        let target = population(viewport, CELLS_PER_STREAMER, MIN_STREAMERS, MAX_STREAMERS);
        self.streamers.truncate(target);
        self.streamers.reserve_exact(target - self.streamers.len());
        while self.streamers.len() < target {
            self.streamers.push(Streamer::spawn(viewport, rng));
        }
    }

    pub fn update(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        for streamer in &mut self.streamers {
            streamer.update(viewport, rng);
        }
    }

    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.streamers.iter().map(Streamer::display)
    }

    pub fn streamers(&self) -> &[Streamer] {
        &self.streamers
    }

    pub fn len(&self) -> usize {
        self.streamers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streamers.is_empty()
    }
}
