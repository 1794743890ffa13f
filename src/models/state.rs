/// Which screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Title screen with the start button.
    #[default]
    Start,
    /// Answering questions.
    Quiz,
    /// Final score. Terminal for the session.
    Result,
    /// The question source could not be loaded. Terminal.
    Error,
}

impl GameState {
    /// Screens on which the cursor trail may be drawn.
    pub fn shows_trail(self) -> bool {
        matches!(self, GameState::Start | GameState::Quiz)
    }
}
