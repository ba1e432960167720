//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which UI component has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! The app owns a [`FeedController`] and translates key events into the
//! controller operations; all rendering happens in `crate::ui` from the
//! derived view.

mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Focus;

use tokio::sync::mpsc;

use crate::clipboard;
use crate::feed::FeedController;
use crate::loader::FeedSource;
use crate::models::Post;

/// How long a snackbar notice stays visible, in ticks.
/// The event loop ticks every 250 ms, so 12 ticks is three seconds.
pub const NOTICE_TICKS: u64 = 12;

/// A transient snackbar notice.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Message text
    pub text: String,
    /// Tick at which the notice disappears
    pub expires_at: u64,
}

/// Top-level application state.
pub struct App {
    /// Feed state: posts, filters, current page
    pub controller: FeedController,
    /// Where the feed came from; used to resolve detail pages
    pub source: FeedSource,
    /// Which component receives key input
    pub focus: Focus,
    /// Selected post on the current page (index into the visible slice)
    pub selected: usize,
    /// Search text exactly as typed (the controller stores it lowercased)
    pub search_input: String,
    /// True until the feed load resolves either way
    pub loading: bool,
    /// True when the load failed; the feed stays empty
    pub load_failed: bool,
    /// Current snackbar notice, if any
    pub notice: Option<Notice>,
    /// Tick counter for notice expiry
    pub tick_count: u64,
    /// Redraw flag; set by anything that changes visible state
    pub needs_redraw: bool,
    /// Set when the user quits
    pub should_quit: bool,
    /// Sender handed to background tasks. Kept here so the channel stays
    /// open for the lifetime of the app.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for loader messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app in its initial state: no posts, "all" category,
    /// empty search, page 1.
    pub fn new(source: FeedSource) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            controller: FeedController::new(),
            source,
            focus: Focus::default(),
            selected: 0,
            search_input: String::new(),
            loading: true,
            load_failed: false,
            notice: None,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Advance the tick counter and expire the notice when due.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        if let Some(notice) = &self.notice {
            if self.tick_count >= notice.expires_at {
                self.notice = None;
                self.mark_dirty();
            }
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply a message from the loader task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::FeedLoaded(posts) => {
                tracing::info!(count = posts.len(), "feed loaded");
                self.controller.set_posts(posts);
                self.loading = false;
                self.selected = 0;
            }
            AppMessage::FeedLoadFailed(reason) => {
                tracing::error!(%reason, "feed load failed");
                self.loading = false;
                self.load_failed = true;
            }
        }
        self.mark_dirty();
    }

    /// Number of posts on the current page.
    pub fn visible_len(&self) -> usize {
        self.controller.recompute().visible.len()
    }

    /// The currently selected post, if the page has one.
    pub fn selected_post(&self) -> Option<&Post> {
        self.controller.recompute().visible.get(self.selected).copied()
    }

    /// Move the selection down within the current page.
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    /// Move the selection up within the current page.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// Go to the next page; the selection restarts at the top.
    pub fn next_page(&mut self) {
        self.controller.next_page();
        self.selected = 0;
        self.mark_dirty();
    }

    /// Go to the previous page; the selection restarts at the top.
    pub fn prev_page(&mut self) {
        self.controller.prev_page();
        self.selected = 0;
        self.mark_dirty();
    }

    /// Step through the category list, wrapping at either end.
    pub fn cycle_category(&mut self, forward: bool) {
        let categories = self.controller.categories();
        if categories.len() < 2 {
            return;
        }

        let current = categories
            .iter()
            .position(|c| c == self.controller.category())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % categories.len()
        } else {
            (current + categories.len() - 1) % categories.len()
        };

        self.controller.set_category(&categories[next]);
        self.selected = 0;
        self.mark_dirty();
    }

    /// Put key input into the search field.
    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
        self.mark_dirty();
    }

    /// Return key input to the feed list.
    pub fn leave_search(&mut self) {
        self.focus = Focus::Feed;
        self.mark_dirty();
    }

    /// Append a character to the search term. Filtering is live.
    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.apply_search();
    }

    /// Delete the last character of the search term.
    pub fn backspace_search(&mut self) {
        if self.search_input.pop().is_some() {
            self.apply_search();
        }
    }

    /// Clear the whole search term.
    pub fn clear_search(&mut self) {
        if !self.search_input.is_empty() {
            self.search_input.clear();
            self.apply_search();
        }
    }

    fn apply_search(&mut self) {
        self.controller.set_search(&self.search_input);
        self.selected = 0;
        self.mark_dirty();
    }

    /// Copy the selected post to the clipboard as plain text.
    pub fn copy_selected(&mut self) {
        let Some(post) = self.selected_post() else {
            return;
        };

        let result = clipboard::copy_post_text(post);
        match result {
            Ok(()) => self.show_notice("post copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.show_notice(&e.user_message());
            }
        }
    }

    /// Open the selected post's detail page in the system browser.
    pub fn open_selected(&mut self) {
        let Some(post) = self.selected_post() else {
            return;
        };

        let location = self.source.detail_location(&post.slug);
        match open::that_detached(&location) {
            Ok(()) => self.show_notice("opening post"),
            Err(e) => {
                tracing::warn!(error = %e, %location, "open failed");
                self.show_notice("could not open post");
            }
        }
    }

    /// Show a transient snackbar notice.
    pub fn show_notice(&mut self, text: &str) {
        self.notice = Some(Notice {
            text: text.to_string(),
            expires_at: self.tick_count + NOTICE_TICKS,
        });
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(FeedSource::parse("feed.json"))
    }

    fn make_posts(count: usize) -> Vec<Post> {
        (1..=count)
            .map(|i| Post {
                slug: format!("post-{i}"),
                title: format!("Post {i}"),
                content: format!("<p>Body {i}</p>"),
                categories: vec!["notes".to_string()],
                formatted_date: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let app = make_app();
        assert!(app.loading);
        assert_eq!(app.controller.category(), "all");
        assert_eq!(app.controller.search(), "");
        assert_eq!(app.controller.page(), 1);
        assert_eq!(app.focus, Focus::Feed);
    }

    #[test]
    fn test_feed_loaded_message() {
        let mut app = make_app();
        app.handle_message(AppMessage::FeedLoaded(make_posts(3)));

        assert!(!app.loading);
        assert_eq!(app.visible_len(), 3);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_feed_load_failed_keeps_feed_empty() {
        let mut app = make_app();
        app.handle_message(AppMessage::FeedLoadFailed("boom".to_string()));

        assert!(!app.loading);
        assert!(app.load_failed);
        assert_eq!(app.visible_len(), 0);
    }

    #[test]
    fn test_selection_stays_on_page() {
        let mut app = make_app();
        app.handle_message(AppMessage::FeedLoaded(make_posts(3)));

        app.select_prev();
        assert_eq!(app.selected, 0);

        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);

        app.select_next();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_page_change_resets_selection() {
        let mut app = make_app();
        app.handle_message(AppMessage::FeedLoaded(make_posts(12)));
        app.select_next();
        assert_eq!(app.selected, 1);

        app.next_page();
        assert_eq!(app.selected, 0);
        assert_eq!(app.controller.page(), 2);
    }

    #[test]
    fn test_search_typing_is_live() {
        let mut app = make_app();
        app.handle_message(AppMessage::FeedLoaded(make_posts(12)));
        app.focus_search();

        for c in "Post 3".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.search_input, "Post 3");
        assert_eq!(app.controller.search(), "post 3");
        assert_eq!(app.visible_len(), 1);

        app.backspace_search();
        assert_eq!(app.search_input, "Post ");

        app.clear_search();
        assert_eq!(app.search_input, "");
        assert_eq!(app.visible_len(), 5);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut app = make_app();
        app.handle_message(AppMessage::FeedLoaded(make_posts(3)));

        assert_eq!(app.controller.category(), "all");
        app.cycle_category(true);
        assert_eq!(app.controller.category(), "notes");
        app.cycle_category(true);
        assert_eq!(app.controller.category(), "all");
        app.cycle_category(false);
        assert_eq!(app.controller.category(), "notes");
    }

    #[test]
    fn test_cycle_category_noop_without_tags() {
        let mut app = make_app();
        app.cycle_category(true);
        assert_eq!(app.controller.category(), "all");
    }

    #[test]
    fn test_notice_expires_after_ticks() {
        let mut app = make_app();
        app.show_notice("hello");
        assert!(app.notice.is_some());

        for _ in 0..NOTICE_TICKS {
            app.tick();
        }
        assert!(app.notice.is_none());
    }
}
