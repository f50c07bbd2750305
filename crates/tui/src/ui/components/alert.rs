use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, FetchPhase},
    ui::theme::Theme,
};

/// Centered alert for a failed fetch, with the retry/dismiss hint.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let FetchPhase::Failed(error) = state.transactions.phase else {
        return;
    };

    let message = error.to_string();
    let hint = "r retry · Esc dismiss";
    let width = (message.len().max(hint.len()) + 4).min(area.width as usize) as u16;
    let height = 4u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect {
        x,
        y,
        width,
        height,
    };

    let style = Style::default().fg(theme.error);
    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .border_style(style);
    let content = Paragraph::new(vec![
        Line::from(message).style(style),
        Line::from(hint).style(Style::default().fg(theme.dim)),
    ])
    .block(block);

    frame.render_widget(Clear, rect);
    frame.render_widget(content, rect);
}
