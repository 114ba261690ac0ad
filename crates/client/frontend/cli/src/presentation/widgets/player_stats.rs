//! Player stats widget displaying health, hydration and inventory.

use game_core::{GameSession, ItemKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, session: &GameSession, theme: &RatatuiTheme) {
    let player = session.player();
    let config = session.config();
    let label = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Health: ", label),
            Span::styled(
                format!("{}/{}", player.health, config.max_health),
                theme.style_health(player.health, config.max_health),
            ),
        ]),
        Line::from(vec![
            Span::styled("Hydration: ", label),
            Span::styled(
                format!("{}/{}", player.hydration, config.max_hydration),
                theme.style_hydration(player.hydration, config.max_hydration),
            ),
        ]),
        Line::from(vec![
            Span::styled("Position: ", label),
            Span::raw(player.position.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Inventory", label)),
    ];

    for kind in ItemKind::iter() {
        let count = player.inventory.count(kind);
        if count > 0 {
            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", kind.glyph())),
                Span::raw(format!("{kind} x{count}")),
            ]));
        }
    }
    if player.inventory.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (empty)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Player "));
    frame.render_widget(paragraph, area);
}
