//! Popup layout helpers

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::widgets::Clear;

/// Center a popup of the given size inside `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Blank out the cells under a popup so the background doesn't bleed through
pub fn clear_under(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
