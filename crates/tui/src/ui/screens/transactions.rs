use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use engine::RowGroup;

use crate::{
    app::{AppState, FetchPhase},
    ui::{
        components::amount::{direction_glyph, styled_amount},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    if state.transactions.phase == FetchPhase::Loading {
        render_loading(frame, area, theme);
        return;
    }

    render_list(frame, area, state, theme);
}

fn render_loading(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let content = Paragraph::new(Line::from(Span::styled(
        "Loading transactions...",
        Style::default().fg(theme.dim),
    )))
    .block(block)
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(content, area);
}

/// Renders the sectioned table.
///
/// Everything shown here comes through the list model's query API
/// (section count, per-section row count, section title, row summary);
/// the raw records never reach this module.
fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let model = &state.transactions.list;
    let mut items: Vec<ListItem<'static>> = Vec::new();
    let mut highlight = None;
    let mut row_index = 0usize;

    for section in 0..model.section_count() {
        let title = model.section_title(section).unwrap_or("");
        items.push(ListItem::new(Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))));

        for row in 0..model.row_count(section).unwrap_or(0) {
            let Some(group) = model.row(section, row) else {
                continue;
            };
            if row_index == state.transactions.selected {
                highlight = Some(items.len());
            }
            items.push(row_item(group, theme));
            row_index += 1;
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if items.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(highlight);

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn row_item(group: &RowGroup, theme: &Theme) -> ListItem<'static> {
    let mut header = vec![
        Span::styled(
            format!("{} ", direction_glyph(group.marker())),
            Style::default().fg(theme.dim),
        ),
        Span::styled(group.count_label(), Style::default().fg(theme.text)),
    ];

    if let Some(date) = group.date() {
        header.push(Span::styled(
            format!("  {date}"),
            Style::default().fg(theme.dim),
        ));
    }

    if let Some(amount) = styled_amount(group, theme) {
        header.push(Span::raw("  "));
        header.push(amount);
    }

    let mut lines = vec![Line::from(header)];
    for description in group.description().lines() {
        lines.push(Line::from(Span::styled(
            format!("    {description}"),
            Style::default().fg(theme.dim),
        )));
    }

    ListItem::new(Text::from(lines))
}
