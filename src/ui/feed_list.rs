//! Post card list rendering.
//!
//! Each card takes a fixed number of rows: a title line with the date on
//! the right, a short body preview, and a blank spacer. On short terminals
//! the preview is dropped so a full page still fits.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::feed::FeedView;
use crate::html::html_to_text;
use crate::models::Post;

use super::helpers::{truncate, wrap};
use super::layout::{centered_column, LayoutContext};
use super::theme::{COLOR_ACCENT, COLOR_BODY, COLOR_DIM, COLOR_HEADER};

/// Body preview lines per card on a normally sized terminal.
const PREVIEW_LINES: usize = 2;

/// Render the feed list, or the relevant empty state.
pub fn render_feed_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &FeedView,
    ctx: &LayoutContext,
) {
    let column = centered_column(area);

    if app.loading {
        render_status_line(frame, column, "loading...");
        return;
    }

    if app.load_failed {
        render_status_line(frame, column, "feed unavailable");
        return;
    }

    if view.is_empty() {
        render_status_line(frame, column, "no posts match");
        return;
    }

    let preview_lines = if ctx.is_short() { 0 } else { PREVIEW_LINES };
    let lines_per_item = 1 + preview_lines + 1;
    let fitting = (column.height as usize) / lines_per_item;

    for (i, post) in view.visible.iter().take(fitting).enumerate() {
        let y = column.y + (i * lines_per_item) as u16;
        let is_selected = i == app.selected;
        render_post_card(frame, column.x, y, column.width, post, is_selected, preview_lines);
    }
}

/// Render one card: `> Title          date` plus the body preview.
fn render_post_card(
    frame: &mut Frame,
    x: u16,
    y: u16,
    width: u16,
    post: &Post,
    is_selected: bool,
    preview_lines: usize,
) {
    let content_width = (width as usize).saturating_sub(2);

    let title = if post.title.is_empty() {
        format!("untitled ({})", post.slug)
    } else {
        post.title.clone()
    };

    let date_text = post.formatted_date.clone();
    let date_width = date_text.len();

    let title_max = content_width.saturating_sub(date_width + 2);
    let title_text = truncate(&title, title_max);

    let title_style = if is_selected {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER)
    };

    let prefix = if is_selected { "> " } else { "  " };
    let prefix_style = if is_selected {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default()
    };

    let padding_len = content_width.saturating_sub(title_text.len() + date_width);
    let padding = " ".repeat(padding_len);

    let title_line = Line::from(vec![
        Span::styled(prefix, prefix_style),
        Span::styled(title_text, title_style),
        Span::raw(padding),
        Span::styled(date_text, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(title_line), Rect::new(x, y, width, 1));

    if preview_lines == 0 {
        return;
    }

    let body = html_to_text(&post.content).replace("\n\n", " ");
    let wrapped = wrap(&body, content_width);
    for (j, line) in wrapped.iter().take(preview_lines).enumerate() {
        let mut text = line.clone();
        if j + 1 == preview_lines && wrapped.len() > preview_lines {
            text = truncate(&format!("{text} ..."), content_width);
        }
        let body_line = Line::from(vec![
            Span::raw("  "),
            Span::styled(text, Style::default().fg(COLOR_BODY)),
        ]);
        frame.render_widget(
            Paragraph::new(body_line),
            Rect::new(x, y + 1 + j as u16, width, 1),
        );
    }
}

fn render_status_line(frame: &mut Frame, column: Rect, message: &str) {
    let line = Line::from(vec![Span::styled(
        message,
        Style::default().fg(COLOR_DIM),
    )]);
    frame.render_widget(Paragraph::new(line), column);
}
