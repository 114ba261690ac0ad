//! Level select screen.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use game_core::{LevelChooser, LevelOracle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::terminal::Tui;

/// Interactive level prompt.
///
/// Used once at startup and again by the engine after every game over.
/// Dismissing the prompt replays the current level.
pub struct LevelSelect<'t> {
    terminal: &'t mut Tui,
    /// Name highlighted when the prompt opens.
    preselect: Option<String>,
}

impl<'t> LevelSelect<'t> {
    pub fn new(terminal: &'t mut Tui) -> Self {
        Self {
            terminal,
            preselect: None,
        }
    }

    pub fn preselect(mut self, level: impl Into<String>) -> Self {
        self.preselect = Some(level.into());
        self
    }

    /// Shows the prompt until a level is picked (`Some`) or dismissed (`None`).
    pub fn prompt(&mut self, levels: &dyn LevelOracle) -> Result<Option<String>> {
        let names = levels.level_names();
        if names.is_empty() {
            return Ok(None);
        }

        let mut selected = self
            .preselect
            .as_deref()
            .and_then(|wanted| names.iter().position(|name| *name == wanted))
            .unwrap_or(0);

        loop {
            self.terminal
                .draw(|frame| render_level_select(frame, &names, selected))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
                    selected = selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
                    if selected + 1 < names.len() {
                        selected += 1;
                    }
                }
                KeyCode::Enter => return Ok(Some(names[selected].to_string())),
                KeyCode::Esc => return Ok(None),
                _ => {}
            }
        }
    }
}

impl LevelChooser for LevelSelect<'_> {
    fn choose_level(&mut self, levels: &dyn LevelOracle) -> Option<String> {
        match self.prompt(levels) {
            Ok(choice) => choice,
            Err(err) => {
                tracing::warn!(%err, "level prompt failed; replaying current level");
                None
            }
        }
    }
}

fn render_level_select(frame: &mut Frame, names: &[&str], selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Level list
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_levels(frame, chunks[1], names, selected);
    render_footer(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "GRIDWALK",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "Collect the keys. Mind the terrain.",
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_levels(frame: &mut Frame, area: Rect, names: &[&str], selected: usize) {
    let items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let is_selected = idx == selected;
            let style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(*name, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Choose Level ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::styled(" Navigate  ", Style::default().fg(Color::Gray)),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Play  ", Style::default().fg(Color::Gray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" Back", Style::default().fg(Color::Gray)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}
