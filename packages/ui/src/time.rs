//! Platform-aware clock and sleep helpers.
//!
//! WASM builds have no monotonic clock and no tokio runtime, so both
//! helpers are cfg-split: `js_sys::Date` / `gloo_timers` in the browser,
//! `SystemTime` / `tokio::time` natively.

/// Seconds since the Unix epoch.
pub fn now_secs() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

/// Suspend the current task.
pub async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}
