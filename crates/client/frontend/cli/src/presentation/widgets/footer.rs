//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let text = Line::from(vec![
        Span::raw("[WASD/Arrows] Move | "),
        Span::raw("[q] Restart | "),
        Span::raw("[Esc/Ctrl-C] Quit"),
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}
