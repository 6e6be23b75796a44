use std::panic;
use leptos::logging::log;

/// Routes panics to the browser console and adds context for Leptos owner
/// disposal panics, which mean a poll touched the feed after it unmounted.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A review poll resolved after the feed was unmounted");
            log!("[PANIC] 2. The poll timer outlived its PollSchedule");
            log!("[PANIC] 3. A signal was read with get() instead of try_get() after cleanup");
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Call once from the WASM entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
