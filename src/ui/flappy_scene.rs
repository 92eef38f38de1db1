//! Renders a simulation snapshot into the terminal.
//!
//! The simulation runs in an 800×600 logical space; every terminal cell is
//! sampled at its center and mapped back into that space.

use crate::constants::{OBSTACLE_WIDTH, PLAYER_SPRITE, PLAYER_X, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::state::{GameState, Snapshot};
use crate::ui::game_common::{
    create_game_layout, render_center_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What a single terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pylon,
    /// Pylon cell bordering the gap.
    PylonLip,
    Player,
}

/// Classifies the logical point `(x, y)`. The player is drawn over pylons.
pub fn cell_at(snapshot: &Snapshot, x: f64, y: f64) -> Cell {
    let in_player = x >= PLAYER_X
        && x < PLAYER_X + PLAYER_SPRITE
        && y >= snapshot.player_y
        && y < snapshot.player_y + PLAYER_SPRITE;
    if in_player {
        return Cell::Player;
    }

    for obstacle in snapshot.obstacles {
        if x < obstacle.x || x >= obstacle.x + OBSTACLE_WIDTH {
            continue;
        }
        let gap_top = obstacle.top_height;
        let gap_bottom = gap_top + snapshot.obstacle_gap;
        if y < gap_top || y >= gap_bottom {
            let near_gap = (y < gap_top && gap_top - y < 25.0)
                || (y >= gap_bottom && y - gap_bottom < 25.0);
            return if near_gap { Cell::PylonLip } else { Cell::Pylon };
        }
    }
    Cell::Empty
}

/// Render the full game screen.
pub fn render_game(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let layout = create_game_layout(frame, area, " Flappy Bob ", Color::Cyan, 22);

    render_play_area(frame, layout.content, snapshot);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);

    match snapshot.state {
        GameState::Start => render_center_banner(
            frame,
            layout.content,
            Color::Yellow,
            "FLAPPY BOB",
            &["Press SPACE or click to start".to_string()],
        ),
        GameState::GameOver => render_center_banner(
            frame,
            layout.content,
            Color::Red,
            "Game Over!",
            &[
                format!("Score: {}", snapshot.score),
                format!("High Score: {}", snapshot.high_score),
                String::new(),
                "Press SPACE or click to restart".to_string(),
            ],
        ),
        GameState::Playing => {}
    }
}

/// Render the play field with the player and pylons.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = SCREEN_WIDTH / width as f64;
    let y_scale = SCREEN_HEIGHT / height as f64;

    let player_char = if snapshot.velocity < -2.0 {
        "▲" // Rising
    } else if snapshot.velocity > 4.0 {
        "▼" // Falling fast
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let y = (row as f64 + 0.5) * y_scale;
        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let x = (col as f64 + 0.5) * x_scale;
                match cell_at(snapshot, x, y) {
                    Cell::Player => Span::styled(
                        player_char,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::Pylon => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::PylonLip => Span::styled("▓", Style::default().fg(Color::LightGreen)),
                    Cell::Empty => Span::raw(" "),
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let controls = [("[Space/Click]", "Flap"), ("[Q/Esc]", "Quit")];
    match snapshot.state {
        GameState::Start => {
            render_status_bar(frame, area, "Press Space to start!", Color::Yellow, &controls)
        }
        GameState::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", snapshot.score),
            Color::Green,
            &controls,
        ),
        GameState::GameOver => render_status_bar(
            frame,
            area,
            "Crashed! Press Space to try again.",
            Color::Red,
            &controls,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", snapshot.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" High Score: ", label),
            Span::styled(
                format!("{}", snapshot.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gap: ", label),
            Span::styled(
                format!("{}", snapshot.obstacle_gap),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
