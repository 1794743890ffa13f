use ratatui::prelude::*;

use super::{INK, ink, particles, render_centered};
use crate::app::App;
use crate::effects::{DrawCommand, Rgba};

const EXCELLENT: &str = "✨ Outstanding work! ✨";
const CONSOLATION: &str = "😊 No worries, you'll do better next time! 😊";
const CELEBRATE: Rgba = Rgba::opaque(255, 150, 0);
const CONSOLE: Rgba = Rgba::opaque(150, 50, 50);
const SWELL_RATE: f64 = 0.1;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let layout = app.layout();

    render_centered(
        frame,
        area,
        layout.title_row(),
        Line::from("Quiz complete!").fg(ink(INK)).bold(),
    );
    let score = format!(
        "Your score: {} / {}",
        session.score(),
        session.total_questions()
    );
    render_centered(frame, area, layout.score_row(), Line::from(score).fg(ink(INK)).bold());

    if session.is_excellent() {
        let message = if swelling(app.frame()) {
            letter_spaced(EXCELLENT)
        } else {
            EXCELLENT.to_string()
        };
        render_centered(
            frame,
            area,
            layout.verdict_row(),
            Line::from(message).fg(ink(CELEBRATE)).bold(),
        );

        let confetti: Vec<DrawCommand> = app.confetti().draw_commands().collect();
        frame.render_widget(particles::layer(&confetti, app.viewport()), area);
    } else {
        render_centered(
            frame,
            area,
            layout.verdict_row(),
            Line::from(CONSOLATION).fg(ink(CONSOLE)),
        );
    }
}

/// The celebration message alternates between normal and enlarged.
fn swelling(frame: u64) -> bool {
    (frame as f64 * SWELL_RATE).sin() > 0.0
}

fn letter_spaced(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    spaced
}
