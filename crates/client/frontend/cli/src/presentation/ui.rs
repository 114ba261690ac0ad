//! Main render entry point composing all widgets.
use anyhow::Result;
use game_core::GameSession;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::canvas::Canvas;
use crate::message::{MessageEntry, MessageLog};
use crate::presentation::{
    terminal::Tui,
    theme::{CELL_WIDTH, RatatuiTheme},
    widgets,
};

/// Rendering context containing all state needed for one frame.
pub struct RenderContext<'a> {
    pub session: &'a GameSession,
    pub canvas: &'a Canvas,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

/// Draws header, map with stats, messages and footer.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Map + stats
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(2),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.session);

        let map_width = u16::try_from(ctx.canvas.width())
            .unwrap_or(u16::MAX)
            .saturating_mul(CELL_WIDTH)
            .saturating_add(2);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(map_width), Constraint::Length(28)])
            .split(chunks[1]);
        widgets::map::render(frame, body[0], ctx.canvas, &theme);
        widgets::player_stats::render(frame, body[1], ctx.session, &theme);

        let visible = ctx.message_panel_height.saturating_sub(2) as usize;
        let recent: Vec<MessageEntry> = ctx.messages.recent(visible).cloned().collect();
        widgets::messages::render(frame, chunks[2], &recent, &theme);

        widgets::footer::render(frame, chunks[3]);
    })?;

    Ok(())
}
