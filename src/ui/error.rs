use ratatui::prelude::*;

use super::{ink, render_centered};
use crate::app::App;
use crate::effects::Rgba;

const ALERT: Rgba = Rgba::opaque(200, 50, 50);

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let row = app.layout().error_row();
    render_centered(
        frame,
        area,
        row,
        Line::from("Error: unable to load the question bank (CSV)")
            .fg(ink(ALERT))
            .bold(),
    );
    if let Some(diagnostic) = app.diagnostic() {
        render_centered(frame, area, row + 2.0, Line::from(diagnostic).fg(ink(ALERT)));
    }
    render_centered(
        frame,
        area,
        row + 3.0,
        Line::from("Check the --questions path, then restart.").fg(ink(ALERT)),
    );
}
