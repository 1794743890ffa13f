use log::{error, info, trace};
use rand::rngs::StdRng;

use crate::data::LoadError;
use crate::effects::{ConfettiField, CursorTrail, StreamerField};
use crate::layout::ScreenLayout;
use crate::models::{GameState, Point, Question, Viewport};
use crate::session::Session;

/// Everything the screen shows, advanced one frame at a time.
///
/// `tick` runs the per-frame update and `click` is the only input path that
/// changes quiz state. Rendering only reads.
pub struct App {
    session: Session,
    diagnostic: Option<String>,
    viewport: Viewport,
    pointer: Option<Point>,
    hovering: bool,
    frame: u64,
    streamers: StreamerField,
    confetti: ConfettiField,
    trail: CursorTrail,
    rng: StdRng,
}

impl App {
    /// Build from the outcome of loading the question source. A load error
    /// latches the error screen.
    pub fn new(
        source: Result<Vec<Question>, LoadError>,
        viewport: Viewport,
        mut rng: StdRng,
    ) -> Self {
        let (session, diagnostic) = match source {
            Ok(questions) => {
                info!("loaded {} questions", questions.len());
                (Session::new(questions), None)
            }
            Err(err) => {
                error!("question source unavailable: {}", err);
                (Session::failed(), Some(err.to_string()))
            }
        };

        Self {
            session,
            diagnostic,
            viewport,
            pointer: None,
            hovering: false,
            frame: 0,
            streamers: StreamerField::new(viewport, &mut rng),
            confetti: ConfettiField::new(viewport, &mut rng),
            trail: CursorTrail::new(),
            rng,
        }
    }

    pub fn with_questions(questions: Vec<Question>, viewport: Viewport, rng: StdRng) -> Self {
        Self::new(Ok(questions), viewport, rng)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    /// Why the question source failed to load, on the error screen.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.viewport)
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Whether the pointer shows the click affordance this frame.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn streamers(&self) -> &StreamerField {
        &self.streamers
    }

    pub fn confetti(&self) -> &ConfettiField {
        &self.confetti
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    /// Advance one frame: resolve a pending selection, settle the screen,
    /// then step the effects that are visible on it.
    pub fn tick(&mut self) {
        self.frame += 1;
        self.session.resolve_pending(self.frame);
        self.session.settle();

        self.hovering = self.pointer_affordance();
        self.trail.update(self.session.state(), self.hovering, self.pointer);

        if self.session.state() == GameState::Result {
            self.streamers.update(self.viewport, &mut self.rng);
            if self.session.is_excellent() {
                self.confetti.update(self.viewport, &mut self.rng);
            }
        }
    }

    /// The hand cursor: over the start button, over an option, or latched
    /// while a selection waits out its delay.
    fn pointer_affordance(&self) -> bool {
        let layout = self.layout();
        match self.session.state() {
            GameState::Start => self
                .pointer
                .is_some_and(|p| layout.start_button().contains(p)),
            GameState::Quiz => {
                self.session.selection().is_some()
                    || self.pointer.is_some_and(|p| {
                        let count = self.current_option_count();
                        layout.option_at(count, p).is_some()
                    })
            }
            GameState::Result | GameState::Error => false,
        }
    }

    fn current_option_count(&self) -> usize {
        self.session
            .current_question()
            .map_or(0, |q| q.options.len())
    }

    pub fn pointer_moved(&mut self, point: Point) {
        self.pointer = Some(point);
    }

    /// Route a press to the start button or an option.
    pub fn click(&mut self, point: Point) {
        self.pointer = Some(point);
        let layout = self.layout();

        if self.session.state() == GameState::Start {
            if layout.start_button().contains(point) {
                self.session.start();
            }
            return;
        }

        if self.session.state() != GameState::Quiz || self.session.selection().is_some() {
            return;
        }

        if let Some(option) = layout.option_at(self.current_option_count(), point) {
            self.session.select(option, self.frame);
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        trace!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        self.streamers.fit(viewport, &mut self.rng);
        self.confetti.fit(viewport, &mut self.rng);
    }
}
