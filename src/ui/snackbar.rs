//! Transient snackbar notice, drawn over the bottom row.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::theme::{COLOR_ACCENT, COLOR_SNACKBAR_BG};

/// Render the active notice centered on the bottom row, if there is one.
pub fn render_snackbar(frame: &mut Frame, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };

    let area = frame.area();
    if area.height == 0 {
        return;
    }

    let text = format!(" {} ", notice.text);
    let width = (text.len() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height - 1;

    let line = Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_SNACKBAR_BG)
            .add_modifier(Modifier::BOLD),
    )]);
    frame.render_widget(Paragraph::new(line), Rect::new(x, y, width, 1));
}
