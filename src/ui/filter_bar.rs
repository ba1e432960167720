//! Category pills and search input rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};

use super::layout::centered_column;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM};

/// Render the category pill row: `all | notes | writing`.
///
/// The active category is highlighted; everything else stays dim.
pub fn render_category_pills(frame: &mut Frame, area: Rect, app: &App) {
    let column = centered_column(area);
    let active = app.controller.category();

    let mut spans = Vec::new();
    for (i, category) in app.controller.categories().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(COLOR_DIM)));
        }
        let style = if category == active {
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(category.clone(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), column);
}

/// Render the search input: `search: ` + term/placeholder + cursor.
pub fn render_search_input(frame: &mut Frame, area: Rect, app: &App) {
    let column = centered_column(area);

    let mut spans = vec![Span::styled("search: ", Style::default().fg(COLOR_DIM))];

    if app.search_input.is_empty() && app.focus != Focus::Search {
        spans.push(Span::styled(
            "press / to search",
            Style::default().fg(COLOR_DIM),
        ));
    } else {
        spans.push(Span::styled(
            app.search_input.clone(),
            Style::default().fg(COLOR_ACCENT),
        ));
        if app.focus == Focus::Search {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), column);
}
