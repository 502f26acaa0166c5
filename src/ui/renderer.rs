use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::{Cell, Game, GameOptions, GameOverRule, Snapshot};

const BOARD_PANEL_WIDTH: u16 = BOARD_WIDTH as u16 * 2 + 2;
const BOARD_PANEL_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;
const INFO_PANEL_WIDTH: u16 = 20;

pub fn ui<R: Rng>(f: &mut Frame, game: &Game<R>) {
    render(f, &game.snapshot(), &game.options);
}

pub fn render(f: &mut Frame, snapshot: &Snapshot, options: &GameOptions) {
    let size = f.size();

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BOARD_PANEL_HEIGHT),
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BOARD_PANEL_WIDTH),
            Constraint::Length(INFO_PANEL_WIDTH),
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, snapshot, board_area);
    render_info(f, options, info_area);

    if snapshot.game_over {
        render_game_over_overlay(f, board_area);
    }
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let cells = snapshot.composite();

    let board_lines: Vec<Line> = cells.iter()
        .map(|row| {
            let spans: Vec<Span> = row.iter()
                .map(|cell| match cell {
                    Cell::Empty => Span::styled(" .", Style::default().fg(Color::DarkGray)),
                    Cell::Filled(color) => Span::styled("██", Style::default().fg(*color)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default()
               .borders(Borders::ALL)
               .title("tstris"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, options: &GameOptions, area: Rect) {
    let rule = match options.game_over_rule {
        GameOverRule::SpawnCollision => "spawn",
        GameOverRule::TopRow => "top row",
    };
    let down = if options.hard_drop_enabled { "↓ hard drop" } else { "↓ soft drop" };

    let info_text = vec![
        Line::from(vec![Span::styled("Controls", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("← → move")]),
        Line::from(vec![Span::raw("↑ rotate")]),
        Line::from(vec![Span::raw(down)]),
        Line::from(vec![Span::raw("R restart")]),
        Line::from(vec![Span::raw("Q quit")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Tick {}ms", options.tick_interval.as_millis()))]),
        Line::from(vec![Span::raw(format!("Ends on {}", rule))]),
    ];

    let info_widget = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(info_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(90, 30, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R to restart")]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(game: &Game) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).unwrap();
        terminal.draw(|f| ui(f, game)).unwrap();
        terminal.backend().buffer().content().iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn game() -> Game {
        Game::with_rng(GameOptions::default(), StdRng::seed_from_u64(11))
    }

    #[test]
    fn draws_board_and_controls() {
        let text = screen_text(&game());
        assert!(text.contains("tstris"));
        assert!(text.contains("rotate"));
        assert!(text.contains("██"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn draws_game_over_overlay() {
        let mut game = game();
        game.board[0] = [Cell::Filled(Color::Gray); BOARD_WIDTH];
        game.spawn_piece();
        assert!(game.is_game_over());
        assert!(screen_text(&game).contains("GAME OVER"));
    }
}
