//! Map widget rendering the canvas the engine painted.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::canvas::{Banner, Canvas};
use crate::presentation::theme::RatatuiTheme;
use game_core::Position;

pub fn render(frame: &mut Frame, area: Rect, canvas: &Canvas, theme: &RatatuiTheme) {
    let marker = canvas.marker();
    let lines: Vec<Line> = canvas
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| {
                    let (text, style) = match cell {
                        Some(view) => {
                            let here = Position::new(x as i32, y as i32);
                            theme.render_cell(view, marker == Some(here))
                        }
                        None => theme.render_blank(),
                    };
                    Span::styled(text, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let map = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Map "));
    frame.render_widget(map, area);

    if let Some(banner) = canvas.banner() {
        render_banner(frame, area, banner);
    }
}

fn render_banner(frame: &mut Frame, area: Rect, banner: Banner) {
    let (text, color) = match banner {
        Banner::Won => ("YOU WIN", Color::Green),
        Banner::Lost => ("YOU LOSE", Color::Red),
    };

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, banner_area, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(24),
        Constraint::Fill(1),
    ])
    .areas(middle);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(Clear, banner_area);
    frame.render_widget(paragraph, banner_area);
}
