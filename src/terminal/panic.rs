//! Panic hook for terminal restoration.

use std::panic;
use std::thread::{self, ThreadId};

use super::setup::emergency_restore;

/// Install a panic hook that restores the terminal and logs the panic
/// before the previous hook prints it.
///
/// Call this from the thread that drives the UI, after
/// `color_eyre::install()` so the report goes through color-eyre's hook.
pub fn setup_panic_hook() {
    install_panic_hook(emergency_restore);
}

/// Install a panic hook that runs `restore` for panics on the calling thread.
///
/// Panics on other threads (runtime workers running a request) are only
/// logged: the task that panicked is reported through its join handle and
/// the UI keeps the terminal.
pub fn install_panic_hook<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let ui_thread = thread::current().id();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if !is_ui_thread(ui_thread) {
            tracing::error!(
                panic = %panic_info,
                thread = thread::current().name().unwrap_or("unnamed"),
                "Background task panicked"
            );
            return;
        }
        restore();
        tracing::error!(panic = %panic_info, "Application panicked");
        original_hook(panic_info);
    }));
}

fn is_ui_thread(ui_thread: ThreadId) -> bool {
    thread::current().id() == ui_thread
}
