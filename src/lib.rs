//! # canvas-quiz
//!
//! A mouse-driven multiple-choice quiz drawn on an animated terminal canvas,
//! with streamers, confetti and a rainbow cursor trail.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use canvas_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // A missing or empty file shows the error screen instead of failing.
//!     let quiz = Quiz::from_csv("assets/questions.csv").frame_rate(60);
//!
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod effects;
mod layout;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

pub use app::App;
pub use data::{
    DEFAULT_QUESTIONS_PATH, LoadError, load_questions_from_csv, load_questions_from_reader,
};
pub use effects::{
    ConfettiField, Confetto, CursorTrail, DrawCommand, Rgba, Shape, Streamer, StreamerField,
    TRAIL_LENGTH,
};
pub use layout::ScreenLayout;
pub use models::{GameState, HitBox, NUM_OPTIONS, Point, Question, Viewport};
pub use session::{SELECTION_DELAY_FRAMES, Selection, Session};

pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const MAX_FRAME_RATE: u32 = 240;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The terminal could not be driven.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Frame rate outside `1..=MAX_FRAME_RATE`.
    #[error("frame rate {0} is out of range (1-240)")]
    FrameRate(u32),
}

/// A quiz ready to run in the terminal.
pub struct Quiz {
    source: Result<Vec<Question>, LoadError>,
    frame_rate: u32,
    seed: Option<u64>,
}

impl Quiz {
    /// Create a quiz from already loaded questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self::from_source(Ok(questions))
    }

    /// Load questions from a CSV file.
    ///
    /// A load failure is kept and shown on the error screen when the quiz
    /// runs.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Self {
        Self::from_source(load_questions_from_csv(path))
    }

    fn from_source(source: Result<Vec<Question>, LoadError>) -> Self {
        Self {
            source,
            frame_rate: DEFAULT_FRAME_RATE,
            seed: None,
        }
    }

    pub fn frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Seed the particle effects for a reproducible animation.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Take over the terminal and run until the user quits.
    pub fn run(self) -> Result<(), QuizError> {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(QuizError::FrameRate(self.frame_rate));
        }
        let frame_interval = Duration::from_secs(1) / self.frame_rate;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut term = terminal::init()?;
        let result = term
            .size()
            .map_err(QuizError::from)
            .and_then(|size| {
                let mut app = App::new(self.source, Viewport::new(size.width, size.height), rng);
                run_event_loop(&mut term, &mut app, frame_interval)
            });
        terminal::restore()?;
        result
    }
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    frame_interval: Duration,
) -> Result<(), QuizError> {
    let mut next_frame = Instant::now();

    loop {
        app.tick();
        terminal.draw(|frame| ui::render(frame, app))?;

        next_frame += frame_interval;
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }

        // Input is handled between frames until the next one is due.
        while event::poll(next_frame.saturating_duration_since(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_quit(key) {
                        info!("quit after {} frames", app.frame());
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(columns, rows) => app.resize(Viewport::new(columns, rows)),
                _ => {}
            }
        }
    }
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let point = Point::cell_center(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(point),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => app.pointer_moved(point),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert!(is_quit(plain(KeyCode::Char('q'))));
        assert!(is_quit(plain(KeyCode::Esc)));
        assert!(!is_quit(plain(KeyCode::Char('c'))));
        assert!(is_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(plain(KeyCode::Enter)));
    }

    #[test]
    fn mouse_press_clicks_cell_center() {
        let questions = vec![Question {
            prompt: "?".to_string(),
            options: ["a".to_string(), "b".to_string(), "c".to_string()],
            correct_answer: "a".to_string(),
        }];
        let mut app =
            App::with_questions(questions, Viewport::new(80, 30), StdRng::seed_from_u64(0));
        let button = app.layout().start_button();

        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: button.left as u16,
            row: button.top as u16 + 1,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, press);
        assert_eq!(app.state(), GameState::Quiz);
        assert_eq!(app.pointer(), Some(Point::new(button.left + 0.5, button.top + 1.5)));
    }

    #[test]
    fn invalid_frame_rate_is_rejected_before_touching_terminal() {
        let err = Quiz::new(Vec::new()).frame_rate(0).run().unwrap_err();
        assert!(matches!(err, QuizError::FrameRate(0)));
    }
}
