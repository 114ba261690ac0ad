//! Ratatui styling for cells, stats and messages.

use game_core::{CellView, Rgb};
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Glyph pair used for each map cell; cells are two columns wide so the
/// grid keeps a roughly square aspect in most terminals.
pub const CELL_WIDTH: u16 = 2;

/// Consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Text and style for one drawn cell.
    pub fn render_cell(&self, cell: &CellView, has_player: bool) -> (String, Style) {
        let background = rgb(cell.tile_color());
        let (glyph, foreground) = if has_player {
            ('@', Color::Rgb(255, 255, 255))
        } else if let Some(item) = cell.item {
            (item.glyph(), rgb(item.color()))
        } else {
            (' ', background)
        };

        let mut style = Style::default().bg(background).fg(foreground);
        if has_player {
            style = style.add_modifier(Modifier::BOLD);
        }
        (format!("{glyph} "), style)
    }

    /// Placeholder for a cell the engine has not drawn yet.
    pub fn render_blank(&self) -> (String, Style) {
        ("  ".to_string(), Style::default())
    }

    pub fn style_health(&self, current: i32, maximum: i32) -> Style {
        Style::default().fg(gauge_color(
            current,
            maximum,
            [Color::Green, Color::Yellow, Color::LightRed, Color::Red],
        ))
    }

    pub fn style_hydration(&self, current: i32, maximum: i32) -> Style {
        Style::default().fg(gauge_color(
            current,
            maximum,
            [Color::Cyan, Color::Blue, Color::LightBlue, Color::DarkGray],
        ))
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }
}

fn rgb(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn gauge_color(current: i32, maximum: i32, colors: [Color; 4]) -> Color {
    if maximum <= 0 {
        return Color::Gray;
    }

    let percent = current.clamp(0, maximum) * 100 / maximum;
    match percent {
        75..=100 => colors[0],
        50..=74 => colors[1],
        25..=49 => colors[2],
        _ => colors[3],
    }
}
