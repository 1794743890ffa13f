use std::f64::consts::TAU;

use rand::Rng;

use super::{DrawCommand, Rgba, Shape, population, uniform};
use crate::models::{Point, Viewport};

const CELLS_PER_CONFETTO: f64 = 100.0;
const MIN_CONFETTI: usize = 10;
const MAX_CONFETTI: usize = 200;

const WIDTH: (f64, f64) = (1.0, 2.0);
const HEIGHT: (f64, f64) = (0.3, 0.8);
const INITIAL_FALL_SPEED: (f64, f64) = (0.25, 0.5);
const GRAVITY: f64 = 0.0025;
const SPAWN_HEIGHT: (f64, f64) = (-5.0, -1.5);
/// How far below the bottom edge a confetto falls before it is recycled.
const BOTTOM_MARGIN: f64 = 1.0;
const MAX_ROTATION_SPEED: f64 = 0.05;

/// A tumbling scrap of paper under constant gravity.
#[derive(Debug, Clone)]
pub struct Confetto {
    pub position: Point,
    pub velocity: Point,
    pub acceleration: Point,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub color: Rgba,
}

impl Confetto {
    pub fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let color = Rgba::opaque(pastel(rng), pastel(rng), pastel(rng));
        let mut confetto = Self {
            position: Point::default(),
            velocity: Point::default(),
            acceleration: Point::default(),
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            color,
        };
        confetto.reset(viewport, rng);
        confetto
    }

    fn reset(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.position = Point::new(
            uniform(rng, 0.0, viewport.width),
            uniform(rng, SPAWN_HEIGHT.0, SPAWN_HEIGHT.1),
        );
        self.velocity = Point::new(0.0, uniform(rng, INITIAL_FALL_SPEED.0, INITIAL_FALL_SPEED.1));
        self.acceleration = Point::new(0.0, GRAVITY);
        self.width = uniform(rng, WIDTH.0, WIDTH.1);
        self.height = uniform(rng, HEIGHT.0, HEIGHT.1);
        self.rotation = uniform(rng, 0.0, TAU);
        self.rotation_speed = uniform(rng, -MAX_ROTATION_SPEED, MAX_ROTATION_SPEED);
    }

    pub fn update(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.velocity.x += self.acceleration.x;
        self.velocity.y += self.acceleration.y;
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.rotation += self.rotation_speed;

        if self.position.y > viewport.height + BOTTOM_MARGIN {
            self.reset(viewport, rng);
        }
    }

    pub fn display(&self) -> DrawCommand {
        DrawCommand {
            shape: Shape::Quad {
                center: self.position,
                width: self.width,
                height: self.height,
                rotation: self.rotation,
            },
            color: self.color,
        }
    }
}

fn pastel(rng: &mut impl Rng) -> u8 {
    rng.gen_range(150..=255)
}

/// Confetti shower for the celebration screen.
#[derive(Debug, Default)]
pub struct ConfettiField {
    confetti: Vec<Confetto>,
}

impl ConfettiField {
    pub fn new(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut field = Self::default();
        field.fit(viewport, rng);
        field
    }

    pub fn fit(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        let target = population(viewport, CELLS_PER_CONFETTO, MIN_CONFETTI, MAX_CONFETTI);
        self.confetti.truncate(target);
        self.confetti.reserve_exact(target - self.confetti.len());
        while self.confetti.len() < target {
            self.confetti.push(Confetto::spawn(viewport, rng));
        }
    }

    pub fn update(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        for confetto in &mut self.confetti {
            confetto.update(viewport, rng);
        }
    }

    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.confetti.iter().map(Confetto::display)
    }

    pub fn confetti(&self) -> &[Confetto] {
        &self.confetti
    }

    pub fn len(&self) -> usize {
        self.confetti.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confetti.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(100, 30)
    }

    #[test]
    fn gravity_accumulates_into_velocity() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut confetto = Confetto::spawn(viewport(), &mut rng);
        confetto.position.y = 0.0;
        let v0 = confetto.velocity.y;

        confetto.update(viewport(), &mut rng);
        assert!((confetto.velocity.y - (v0 + GRAVITY)).abs() < 1e-12);
        assert!((confetto.position.y - (v0 + GRAVITY)).abs() < 1e-12);

        confetto.update(viewport(), &mut rng);
        assert!((confetto.velocity.y - (v0 + 2.0 * GRAVITY)).abs() < 1e-12);
        assert!((confetto.position.y - (2.0 * v0 + 3.0 * GRAVITY)).abs() < 1e-12);
    }

    #[test]
    fn survives_inside_margin() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut confetto = Confetto::spawn(viewport(), &mut rng);
        confetto.position.y = 30.0;
        confetto.velocity.y = 0.5;
        confetto.update(viewport(), &mut rng);
        assert!(confetto.position.y > 30.0);
    }

    #[test]
    fn recycles_above_top_edge() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut confetto = Confetto::spawn(viewport(), &mut rng);
        confetto.position.y = 40.0;
        confetto.velocity.y = 3.0;
        confetto.update(viewport(), &mut rng);

        assert!(confetto.position.y < 0.0);
        assert!(confetto.velocity.y < INITIAL_FALL_SPEED.1);
        assert_eq!(confetto.acceleration, Point::new(0.0, GRAVITY));
    }

    #[test]
    fn colors_are_pastel() {
        let mut rng = StdRng::seed_from_u64(14);
        let field = ConfettiField::new(viewport(), &mut rng);
        assert_eq!(field.len(), 30);
        for confetto in field.confetti() {
            let Rgba { r, g, b, a } = confetto.color;
            assert!(r >= 150 && g >= 150 && b >= 150);
            assert_eq!(a, 255);
        }
    }

    #[test]
    fn never_stays_below_viewport() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut field = ConfettiField::new(viewport(), &mut rng);
        for _ in 0..3000 {
            field.update(viewport(), &mut rng);
            assert!(
                field
                    .confetti()
                    .iter()
                    .all(|c| c.position.y <= 30.0 + BOTTOM_MARGIN)
            );
        }
    }
}
