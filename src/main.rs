use lectern::app::{App, AppMessage, Focus};
use lectern::cli::{parse_args, CliArgs, CliCommand};
use lectern::loader::{load_feed, FeedSource, DEFAULT_FEED_PATH};
use lectern::terminal::{setup_panic_hook, TerminalManager};
use lectern::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Mutex;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tick interval for the event loop. Drives snackbar expiry; nothing in
/// this UI animates faster than that.
const TICK_MS: u64 = 250;

fn main() -> Result<()> {
    let args = parse_args(std::env::args());

    if args.command == CliCommand::Version {
        println!("lectern {VERSION}");
        return Ok(());
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // Logging goes to a file; the terminal belongs to the TUI
    init_logging();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(args))
}

/// Initialize file-based logging, honoring `RUST_LOG`.
///
/// Best effort: if the log file cannot be created the app runs unlogged.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("lectern");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::File::create(log_dir.join("lectern.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Set up the terminal, kick off the one-shot feed load, and run the loop.
async fn run_tui(args: CliArgs) -> Result<()> {
    let source = FeedSource::parse(args.feed.as_deref().unwrap_or(DEFAULT_FEED_PATH));

    let mut app = App::new(source.clone());
    spawn_feed_load(source, app.message_tx.clone());

    let mut term_manager = TerminalManager::new()?;

    run_app(term_manager.terminal(), &mut app).await
}

/// Load the feed once in the background and report the outcome.
///
/// No retry, no timeout: a failure leaves the feed empty and is only
/// visible in the log and the empty-state message.
fn spawn_feed_load(source: FeedSource, tx: mpsc::UnboundedSender<AppMessage>) {
    tokio::spawn(async move {
        let message = match load_feed(&source).await {
            Ok(posts) => AppMessage::FeedLoaded(posts),
            Err(e) => AppMessage::FeedLoadFailed(e.to_string()),
        };
        let _ = tx.send(message);
    });
}

/// The main event loop: draw when dirty, then wait on the tick timer, the
/// loader channel, and keyboard input.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_MS));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            message = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.mark_dirty();

                            // Global quit, regardless of focus
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                                return Ok(());
                            }

                            match app.focus {
                                Focus::Search => handle_search_key(app, key.code, key.modifiers),
                                Focus::Feed => {
                                    if handle_feed_key(app, key.code) {
                                        return Ok(());
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Keys while typing in the search field.
fn handle_search_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.leave_search(),
        KeyCode::Backspace => app.backspace_search(),
        // Ctrl+U = Unix "kill line"
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => app.clear_search(),
        KeyCode::Char(c)
            if !modifiers.intersects(
                KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
            ) =>
        {
            app.push_search_char(c);
        }
        _ => {}
    }
}

/// Keys while browsing the feed. Returns true when the app should exit.
fn handle_feed_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => {
            app.quit();
            return true;
        }
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('c') => app.cycle_category(true),
        KeyCode::Char('C') => app.cycle_category(false),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('o') | KeyCode::Enter => app.open_selected(),
        _ => {}
    }
    false
}
