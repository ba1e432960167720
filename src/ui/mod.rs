//! UI rendering for the lectern feed view.
//!
//! Layout, top to bottom: header, category pills, search input, the post
//! list, the pagination bar, and a keybind hint row. A snackbar notice
//! overlays the bottom row when active.
//!
//! Rendering is pure: everything is drawn from `&App` and the view derived
//! from its controller; no state is mutated here.

mod feed_list;
mod filter_bar;
mod helpers;
mod layout;
mod pagination;
mod snackbar;
mod theme;

pub use helpers::{truncate, wrap};
pub use layout::{centered_column, LayoutContext};
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BODY, COLOR_DIM, COLOR_HEADER, COLOR_SNACKBAR_BG,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};

use feed_list::render_feed_list;
use filter_bar::{render_category_pills, render_search_input};
use pagination::render_pagination;
use snackbar::render_snackbar;

/// Render the whole UI for one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let view = app.controller.recompute();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Header (title | count)
            Constraint::Length(1),                 // Spacing
            Constraint::Length(1),                 // Category pills
            Constraint::Length(1),                 // Search input
            Constraint::Length(ctx.margin_rows()), // Margin
            Constraint::Min(4),                    // Post list
            Constraint::Length(1),                 // Pagination
            Constraint::Length(1),                 // Keybind hints
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_category_pills(frame, chunks[2], app);
    render_search_input(frame, chunks[3], app);
    render_feed_list(frame, chunks[5], app, &view, &ctx);
    render_pagination(frame, chunks[6], &view);
    render_hints(frame, chunks[7], app);
    render_snackbar(frame, app);
}

/// Header: app name on the left, post count on the right.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let column = centered_column(area);

    let title_span = Span::styled(
        "lectern",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![title_span])),
        Rect::new(column.x, column.y, column.width.min(7), 1),
    );

    let count = app.controller.posts().len();
    let count_text = format!("{count} posts");
    let count_width = (count_text.len() as u16).min(column.width);
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            count_text,
            Style::default().fg(COLOR_DIM),
        )])),
        Rect::new(
            column.x + column.width - count_width,
            column.y,
            count_width,
            1,
        ),
    );
}

/// Keybind hints, adapted to the focused component.
fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let column = centered_column(area);

    let hints = match app.focus {
        Focus::Search => "esc done   ctrl+u clear   type to filter",
        Focus::Feed => "/ search   c category   h/l page   j/k select   y copy   o open   q quit",
    };

    let text = truncate(hints, column.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            text,
            Style::default().fg(COLOR_DIM),
        )])),
        column,
    );
}
