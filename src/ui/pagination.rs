//! Pagination bar rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::feed::FeedView;

use super::layout::centered_column;
use super::theme::{COLOR_ACCENT, COLOR_DIM};

/// Render `‹ prev   page X of Y   next ›`, centered.
///
/// Hidden entirely when everything fits on one page. The prev/next labels
/// go dim at the first/last page, mirroring disabled buttons.
pub fn render_pagination(frame: &mut Frame, area: Rect, view: &FeedView) {
    if !view.has_multiple_pages {
        return;
    }

    let column = centered_column(area);

    let prev_style = if view.has_prev() {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let next_style = if view.has_next() {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label = format!("page {} of {}", view.current_page, view.total_pages);

    let spans = vec![
        Span::styled("‹ prev", prev_style),
        Span::raw("   "),
        Span::styled(label, Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("next ›", next_style),
    ];

    let line = Line::from(spans);
    let line_width = line.width() as u16;
    let x = column.x + column.width.saturating_sub(line_width) / 2;
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(x, column.y, line_width.min(column.width), 1),
    );
}
