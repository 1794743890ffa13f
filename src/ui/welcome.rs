use ratatui::prelude::*;

use super::{INK, ink, render_button, render_centered};
use crate::app::App;
use crate::effects::Rgba;

const TITLE: &str = "CANVAS QUIZ";
const BUTTON_LABEL: &str = "Start quiz";
const BUTTON_IDLE: Rgba = Rgba::opaque(100, 100, 100);
const BUTTON_HOVER: Rgba = Rgba::opaque(50, 150, 255);

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let layout = app.layout();
    let total = app.session().total_questions();

    render_centered(
        frame,
        area,
        layout.title_row(),
        Line::from(TITLE).fg(ink(INK)).bold(),
    );

    let count = if total == 1 {
        "1 question".to_string()
    } else {
        format!("{} questions", total)
    };
    render_centered(frame, area, layout.subtitle_row(), Line::from(count).fg(ink(INK)));

    let hovered = app.is_hovering();
    let fill = if hovered { BUTTON_HOVER } else { BUTTON_IDLE };
    render_button(frame, area, layout.start_button(), BUTTON_LABEL, fill, hovered);
}
