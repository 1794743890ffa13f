mod geometry;
pub(crate) mod question;
mod state;

pub use geometry::{HitBox, Point, Viewport};
pub use question::{NUM_OPTIONS, Question};
pub use state::GameState;
