//! Timer utilities for the deferred wizard steps.

/// Sleep for `ms` milliseconds on the current platform's timer.
///
/// Futures awaiting this are normally spawned through Dioxus `spawn`, so the
/// sleep is dropped together with the component that scheduled it.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let clamped = ms.min(u32::MAX as u64) as u32;
    gloo_timers::future::TimeoutFuture::new(clamped).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
