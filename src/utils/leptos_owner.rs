use leptos::logging::log;
use leptos::{RwSignal, SignalUpdate};

/// Updates a signal unless its owner has already been disposed.
/// If the value is gone, logs and returns None.
pub fn update_if_alive<T, O>(
    signal: RwSignal<T>,
    log_context: &str,
    f: impl FnOnce(&mut T) -> O,
) -> Option<O> {
    let result = signal.try_update(f);
    if result.is_none() {
        log!("[OWNER] Signal already disposed: {}", log_context);
    }
    result
}
