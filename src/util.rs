// Small helpers shared by the model and the components.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Answers are compared trimmed and upper-cased.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Milliseconds from `performance.now()`, or 0 outside a browser window.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// One-shot `setTimeout`. The closure is handed to JS and freed after it runs.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .is_err()
    {
        log::warn!("setTimeout rejected a {delay_ms}ms timer");
    }
}
