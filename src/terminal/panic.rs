//! Panic hook for terminal restoration.
//!
//! Restores the terminal to a usable state when the application panics, so
//! a crash never leaves the shell stuck in the alternate screen.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call early in `main()`, before creating the `TerminalManager`. The hook
/// restores the terminal first and then delegates to the original hook so
/// the panic message still prints.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
