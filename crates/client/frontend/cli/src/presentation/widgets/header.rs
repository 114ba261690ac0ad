//! Header widget: level, goal and turn counter.

use game_core::{GameSession, GameStatus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, session: &GameSession) {
    let status_style = match session.status() {
        GameStatus::Playing => Style::default().fg(Color::Gray),
        GameStatus::Won => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        GameStatus::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let line = Line::from(vec![
        Span::styled(
            session.level_name(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Goal: "),
        Span::raw(session.grid().win_condition().to_string()),
        Span::raw(format!(" | Turn {} | ", session.turn())),
        Span::styled(session.status().as_ref().to_string(), status_style),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
