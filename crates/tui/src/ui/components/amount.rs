use api_types::transaction::Direction;
use engine::{AmountTone, RowGroup};
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Styled span for a group's amount text, `None` when the group has no
/// amount to show (no direction on the first member).
#[must_use]
pub fn styled_amount(group: &RowGroup, theme: &Theme) -> Option<Span<'static>> {
    let text = group.amount()?;
    let color = match group.tone() {
        AmountTone::Positive => theme.positive,
        AmountTone::Default => theme.text,
    };
    Some(Span::styled(text, Style::default().fg(color)))
}

/// Marker glyph for a group's direction; a space keeps columns aligned
/// when the direction is absent.
#[must_use]
pub fn direction_glyph(marker: Option<Direction>) -> &'static str {
    match marker {
        Some(Direction::Credit) => "▲",
        Some(Direction::Debit) => "▼",
        None => " ",
    }
}
