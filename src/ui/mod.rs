mod error;
mod particles;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::App;
use crate::effects::{BACKGROUND, DrawCommand, Rgba};
use crate::models::{GameState, HitBox};

const INK: Rgba = Rgba::opaque(50, 50, 50);
const LABEL: Rgba = Rgba::opaque(255, 255, 255);

/// Paint one frame: background and streamers, the current screen, then the
/// cursor trail on top.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = app.state();

    let streamers: Vec<DrawCommand> = if state == GameState::Result {
        app.streamers().draw_commands().collect()
    } else {
        Vec::new()
    };
    frame.render_widget(particles::layer(&streamers, app.viewport()), area);

    match state {
        GameState::Start => welcome::render(frame, area, app),
        GameState::Quiz => quiz::render(frame, area, app),
        GameState::Result => result::render(frame, area, app),
        GameState::Error => error::render(frame, area, app),
    }

    let trail = app.trail().draw_commands(app.frame()).collect();
    frame.render_widget(particles::TrailOverlay::new(trail), area);
}

/// Terminal colour for `rgba` composited over the page background.
fn ink(rgba: Rgba) -> Color {
    let Rgba { r, g, b, .. } = rgba.over(BACKGROUND);
    Color::Rgb(r, g, b)
}

/// One line of centred text on viewport row `row`.
fn render_centered(frame: &mut Frame, area: Rect, row: f64, line: Line) {
    if row < 0.0 {
        return;
    }
    let y = area.y.saturating_add(row as u16);
    let rect = Rect::new(area.x, y, area.width, 1).intersection(area);
    if rect.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
}

/// A rounded, filled box with a centred label over `hit_box`. Enlarged boxes
/// grow one cell to each side.
fn render_button(
    frame: &mut Frame,
    area: Rect,
    hit_box: HitBox,
    label: &str,
    fill: Rgba,
    enlarged: bool,
) {
    let hit_box = if enlarged { hit_box.inflate(1.0, 0.0) } else { hit_box };
    let rect = hit_box.cells(area);
    if rect.is_empty() {
        return;
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ink(LABEL)))
        .style(Style::default().bg(ink(fill)));
    let widget = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(ink(LABEL)).bold())
        .block(block);
    frame.render_widget(widget, rect);
}
