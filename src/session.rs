//! Quiz state machine.
//!
//! Owns the screen state and the scoring fields. Every transition goes
//! through a method here; nothing else writes these fields.

use log::debug;

use crate::models::{GameState, Question};

/// Frames a selection stays on screen before the quiz advances
/// (about 0.3s at 60 frames per second).
pub const SELECTION_DELAY_FRAMES: u64 = 18;

/// Accuracy at or above this ratio gets the celebration screen.
pub const EXCELLENT_NUMERATOR: usize = 4;
pub const EXCELLENT_DENOMINATOR: usize = 5;

/// An option that has been clicked and is waiting out the selection delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub option: usize,
    pub started_at: u64,
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    questions: Vec<Question>,
    current_question_index: usize,
    score: usize,
    selection: Option<Selection>,
}

impl Session {
    /// A fresh session on the start screen.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            state: GameState::Start,
            questions,
            current_question_index: 0,
            score: 0,
            selection: None,
        }
    }

    /// A session latched into the error screen. It never leaves it.
    pub fn failed() -> Self {
        Self {
            state: GameState::Error,
            ..Self::new(Vec::new())
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// The question on screen, or `None` once the list is exhausted.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn accuracy(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.score as f64 / self.questions.len() as f64
    }

    /// Whether the result screen celebrates. Inclusive at exactly 80%.
    pub fn is_excellent(&self) -> bool {
        !self.questions.is_empty()
            && self.score * EXCELLENT_DENOMINATOR >= self.questions.len() * EXCELLENT_NUMERATOR
    }

    /// START -> QUIZ. Returns false if not on the start screen.
    pub fn start(&mut self) -> bool {
        if self.state != GameState::Start {
            return false;
        }
        self.transition(GameState::Quiz);
        true
    }

    /// Record a clicked option and start the selection delay.
    ///
    /// Ignored unless a question is on screen with no selection pending.
    pub fn select(&mut self, option: usize, frame: u64) -> bool {
        if self.state != GameState::Quiz || self.selection.is_some() {
            return false;
        }
        let Some(question) = self.current_question() else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }

        debug!(
            "question {} selected option {} at frame {}",
            self.current_question_index + 1,
            option,
            frame
        );
        self.selection = Some(Selection {
            option,
            started_at: frame,
        });
        true
    }

    /// Score and advance once the pending selection has been visible for
    /// the full delay. Returns true when the quiz advanced.
    pub fn resolve_pending(&mut self, frame: u64) -> bool {
        let Some(selection) = self.selection else {
            return false;
        };
        if frame <= selection.started_at + SELECTION_DELAY_FRAMES {
            return false;
        }

        if let Some(question) = self.current_question() {
            let correct = question.is_correct(selection.option);
            if correct {
                self.score += 1;
            }
            debug!(
                "question {} answered {}",
                self.current_question_index + 1,
                if correct { "correctly" } else { "incorrectly" }
            );
        }
        self.current_question_index += 1;
        self.selection = None;
        true
    }

    /// QUIZ -> RESULT once every question has been answered. Also guards
    /// against an index past the end before any per-question read.
    pub fn settle(&mut self) -> bool {
        if self.state == GameState::Quiz && self.current_question_index >= self.questions.len() {
            self.transition(GameState::Result);
            return true;
        }
        false
    }

    fn transition(&mut self, next: GameState) {
        debug!("state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| Question {
                prompt: format!("Question {i}"),
                options: [format!("a{i}"), format!("b{i}"), format!("c{i}")],
                correct_answer: format!("b{i}"),
            })
            .collect()
    }

    /// Answer the current question and run frames until it resolves.
    fn answer(session: &mut Session, option: usize, frame: &mut u64) {
        assert!(session.select(option, *frame));
        while !session.resolve_pending(*frame) {
            *frame += 1;
        }
        session.settle();
    }

    #[test]
    fn starts_on_start_screen() {
        let session = Session::new(questions(2));
        assert_eq!(session.state(), GameState::Start);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_question_index(), 0);
        assert!(session.selection().is_none());
    }

    #[test]
    fn start_only_leaves_start_screen() {
        let mut session = Session::new(questions(2));
        assert!(session.start());
        assert_eq!(session.state(), GameState::Quiz);
        assert!(!session.start());
        assert_eq!(session.state(), GameState::Quiz);
    }

    #[test]
    fn selection_ignored_before_start() {
        let mut session = Session::new(questions(2));
        assert!(!session.select(0, 1));
        assert!(session.selection().is_none());
    }

    #[test]
    fn selection_holds_for_delay_then_advances_once() {
        let mut session = Session::new(questions(3));
        session.start();
        assert!(session.select(1, 10));

        for frame in 11..=10 + SELECTION_DELAY_FRAMES {
            assert!(!session.resolve_pending(frame));
            assert_eq!(session.current_question_index(), 0);
            assert_eq!(session.selection().map(|s| s.option), Some(1));
        }

        assert!(session.resolve_pending(11 + SELECTION_DELAY_FRAMES));
        assert_eq!(session.current_question_index(), 1);
        assert!(session.selection().is_none());
        assert_eq!(session.score(), 1);

        assert!(!session.resolve_pending(12 + SELECTION_DELAY_FRAMES));
        assert_eq!(session.current_question_index(), 1);
    }

    #[test]
    fn clicks_during_delay_are_ignored() {
        let mut session = Session::new(questions(2));
        session.start();
        assert!(session.select(0, 5));
        assert!(!session.select(1, 6));
        assert!(!session.select(2, 20));
        assert_eq!(session.selection().map(|s| s.option), Some(0));
        assert_eq!(session.selection().map(|s| s.started_at), Some(5));
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut session = Session::new(questions(1));
        session.start();
        assert!(!session.select(3, 0));
        assert!(session.selection().is_none());
    }

    #[test]
    fn all_correct_scores_every_question() {
        let mut session = Session::new(questions(4));
        session.start();
        let mut frame = 0;
        for _ in 0..4 {
            answer(&mut session, 1, &mut frame);
        }
        assert_eq!(session.score(), 4);
        assert_eq!(session.state(), GameState::Result);
        assert!(session.is_excellent());
    }

    #[test]
    fn all_wrong_scores_zero() {
        let mut session = Session::new(questions(4));
        session.start();
        let mut frame = 0;
        for i in 0..4 {
            answer(&mut session, if i % 2 == 0 { 0 } else { 2 }, &mut frame);
        }
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), GameState::Result);
        assert!(!session.is_excellent());
    }

    #[test]
    fn mixed_answers_get_consolation() {
        let mut session = Session::new(questions(5));
        session.start();
        let mut frame = 0;
        for option in [1, 1, 0, 1, 2] {
            answer(&mut session, option, &mut frame);
        }
        assert_eq!(session.score(), 3);
        assert!((session.accuracy() - 0.6).abs() < f64::EPSILON);
        assert!(!session.is_excellent());
    }

    #[test]
    fn exactly_eighty_percent_celebrates() {
        let mut session = Session::new(questions(5));
        session.start();
        let mut frame = 0;
        for option in [1, 1, 1, 1, 0] {
            answer(&mut session, option, &mut frame);
        }
        assert_eq!(session.score(), 4);
        assert!(session.is_excellent());
    }

    #[test]
    fn settle_waits_for_last_answer() {
        let mut session = Session::new(questions(1));
        session.start();
        assert!(!session.settle());
        session.select(1, 0);
        assert!(!session.settle());
        session.resolve_pending(SELECTION_DELAY_FRAMES + 1);
        assert!(session.settle());
        assert_eq!(session.state(), GameState::Result);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn result_screen_ignores_input() {
        let mut session = Session::new(questions(1));
        session.start();
        let mut frame = 0;
        answer(&mut session, 1, &mut frame);
        assert!(!session.select(0, frame));
        assert!(!session.start());
        assert_eq!(session.state(), GameState::Result);
    }

    #[test]
    fn failed_session_never_leaves_error() {
        let mut session = Session::failed();
        assert_eq!(session.state(), GameState::Error);
        assert!(!session.start());
        assert!(!session.select(0, 0));
        assert!(!session.settle());
        assert_eq!(session.state(), GameState::Error);
    }
}
