pub mod flappy_scene;
pub mod game_common;

use crate::core::state::Snapshot;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the game screen fits in.
pub const MIN_WIDTH: u16 = 50;
pub const MIN_HEIGHT: u16 = 14;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let msg = Paragraph::new(format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
        frame.render_widget(msg, size);
        return;
    }

    flappy_scene::render_game(frame, size, snapshot);
}
