//! Responsive layout helpers.

use ratatui::layout::Rect;

/// Column width as a fraction of the terminal width.
const COLUMN_WIDTH_PERCENT: f32 = 0.915;

/// Terminal dimensions plus proportional sizing helpers.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Margin rows between the filter bar and the list.
    pub fn margin_rows(&self) -> u16 {
        ((self.height as f32 * 0.04).round() as u16).max(1)
    }

    /// Terminals too short for body previews.
    pub fn is_short(&self) -> bool {
        self.height < 20
    }
}

/// Horizontally centered content column.
pub fn centered_column(area: Rect) -> Rect {
    let column_width = (area.width as f32 * COLUMN_WIDTH_PERCENT).round() as u16;
    let left_padding = (area.width - column_width) / 2;

    Rect::new(area.x + left_padding, area.y, column_width, area.height)
}
