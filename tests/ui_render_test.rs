// Rendering tests against a TestBackend: empty states, post cards,
// pagination visibility.

use lectern::app::{App, AppMessage};
use lectern::loader::FeedSource;
use lectern::models::Post;
use lectern::ui;
use ratatui::{backend::TestBackend, Terminal};

fn make_app() -> App {
    App::new(FeedSource::parse("feed.json"))
}

fn make_posts(count: usize) -> Vec<Post> {
    (1..=count)
        .map(|i| Post {
            slug: format!("post-{i}"),
            title: format!("Post number {i}"),
            content: format!("<p>Body of post {i}</p>"),
            categories: vec!["notes".to_string()],
            formatted_date: "2 de maio de 2024".to_string(),
        })
        .collect()
}

/// Draw one frame and return the buffer contents as a single string.
fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_loading_state() {
    let app = make_app();
    let screen = render_to_string(&app, 80, 24);
    assert!(screen.contains("loading..."));
    assert!(screen.contains("lectern"));
}

#[test]
fn test_empty_feed_shows_no_posts_match() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoaded(Vec::new()));

    let screen = render_to_string(&app, 80, 24);
    assert!(screen.contains("no posts match"));
}

#[test]
fn test_failed_load_shows_feed_unavailable() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoadFailed("connection refused".to_string()));

    let screen = render_to_string(&app, 80, 24);
    assert!(screen.contains("feed unavailable"));
}

#[test]
fn test_first_page_renders_five_cards() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoaded(make_posts(12)));

    let screen = render_to_string(&app, 80, 30);
    for i in 1..=5 {
        assert!(
            screen.contains(&format!("Post number {i}")),
            "missing card for post {i}"
        );
    }
    assert!(!screen.contains("Post number 6"));
}

#[test]
fn test_pagination_visible_with_multiple_pages() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoaded(make_posts(12)));

    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("page 1 of 3"));
}

#[test]
fn test_pagination_hidden_on_single_page() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoaded(make_posts(3)));

    let screen = render_to_string(&app, 80, 30);
    assert!(!screen.contains("page 1 of 1"));
    assert!(!screen.contains("next"));
}

#[test]
fn test_zero_search_results_render_empty_state() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoaded(make_posts(12)));
    app.focus_search();
    for c in "zzzz".chars() {
        app.push_search_char(c);
    }

    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("no posts match"));
    assert!(!screen.contains("Post number 1"));
}

#[test]
fn test_category_pills_render() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoaded(make_posts(3)));

    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("all"));
    assert!(screen.contains("notes"));
}

#[test]
fn test_snackbar_overlays_bottom_row() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoaded(make_posts(3)));
    app.show_notice("post copied to clipboard");

    let screen = render_to_string(&app, 80, 30);
    assert!(screen.contains("post copied to clipboard"));
}

#[test]
fn test_render_survives_tiny_terminal() {
    let mut app = make_app();
    app.handle_message(AppMessage::FeedLoaded(make_posts(12)));

    // Should not panic at degenerate sizes.
    let _ = render_to_string(&app, 20, 10);
    let _ = render_to_string(&app, 10, 12);
}
