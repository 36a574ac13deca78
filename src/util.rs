// Browser helpers shared by the components.

pub fn clog(msg: &str) {
    // Console logging only in debug builds
    #[cfg(debug_assertions)]
    gloo::console::log!(msg);
    #[cfg(not(debug_assertions))]
    let _ = msg;
}

/// Inner window size in CSS pixels.
pub fn viewport_size() -> (u32, u32) {
    let Some(window) = web_sys::window() else {
        return (800, 600);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (width.max(0.0) as u32, height.max(0.0) as u32)
}

/// Fresh per-session seed for shuffling and confetti.
pub fn session_seed() -> u64 {
    let r = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let t = js_sys::Date::now() as u64;
    (r << 32) ^ t
}
