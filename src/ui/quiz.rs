use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::{INK, ink, render_button, render_centered};
use crate::app::App;
use crate::effects::{BACKGROUND, Rgba};
use crate::models::{HitBox, Point};

const OPTION_IDLE: Rgba = Rgba::new(100, 100, 100, 180);
const OPTION_HOVER: Rgba = Rgba::opaque(50, 100, 255);
const PULSE: Rgba = Rgba::opaque(255, 100, 100);
const PULSE_RATE: f64 = 0.5;
const PROMPT_ROWS: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };
    let layout = app.layout();

    let progress = format!(
        "Question {} / {}",
        session.current_question_index() + 1,
        session.total_questions()
    );
    render_centered(frame, area, layout.progress_row(), Line::from(progress).fg(ink(INK)));

    render_prompt(frame, area, &question.prompt, layout.prompt_row(), layout.prompt_width());

    let selection = session.selection();
    let pointer = app.pointer();
    for (index, (option, hit_box)) in question
        .options
        .iter()
        .zip(layout.option_boxes(question.options.len()))
        .enumerate()
    {
        let hovered = selection.is_none() && pointer.is_some_and(|p| hit_box.contains(p));
        let mut fill = if hovered {
            OPTION_HOVER
        } else {
            OPTION_IDLE.over(BACKGROUND)
        };
        if selection.is_some_and(|s| s.option == index) {
            fill = PULSE.with_alpha(pulse_alpha(app.frame())).over(fill);
        }
        render_button(frame, area, hit_box, option, fill, hovered);
    }
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str, row: f64, width: f64) {
    let rows = f64::from(PROMPT_ROWS);
    let center = Point::new(f64::from(area.width / 2), row + rows / 2.0);
    let rect = HitBox::centered(center, width, rows).cells(area);
    if rect.is_empty() {
        return;
    }
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(Style::default().fg(ink(INK)).bold());
    frame.render_widget(widget, rect);
}

/// Flash strength for the selected option, between 150 and 255.
fn pulse_alpha(frame: u64) -> u8 {
    let wave = (frame as f64 * PULSE_RATE).sin();
    (150.0 + (wave + 1.0) / 2.0 * 105.0).round() as u8
}
