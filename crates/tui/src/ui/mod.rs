pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, FetchPhase};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Transactions table
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::transactions::render(frame, layout[1], state, &theme);
    render_bottom_bar(frame, layout[2], state, &theme);
    components::alert::render(frame, area, state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let status = match state.transactions.phase {
        FetchPhase::Loading => Span::styled("Loading", Style::default().fg(theme.dim)),
        FetchPhase::Loaded => Span::styled("OK", Style::default().fg(theme.positive)),
        FetchPhase::Failed(_) => Span::styled("ERR", Style::default().fg(theme.error)),
    };

    let line = Line::from(vec![
        Span::styled(
            "Transactions",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("User", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.user_id)),
        status,
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![
        Span::styled("r", Style::default().fg(theme.accent)),
        Span::raw(" refresh  "),
        Span::styled("j/k", Style::default().fg(theme.accent)),
        Span::raw(" scroll  "),
        Span::styled("q", Style::default().fg(theme.accent)),
        Span::raw(" quit"),
    ];

    if matches!(state.transactions.phase, FetchPhase::Failed(_)) {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.push(Span::styled("r", Style::default().fg(theme.accent)));
        parts.push(Span::raw(" retry  "));
        parts.push(Span::styled("Esc", Style::default().fg(theme.accent)));
        parts.push(Span::raw(" dismiss"));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
