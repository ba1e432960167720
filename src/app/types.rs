//! Core app enums.

/// Which part of the UI receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Browsing the post list
    #[default]
    Feed,
    /// Typing in the search field
    Search,
}
