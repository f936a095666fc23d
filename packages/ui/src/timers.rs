//! Platform-split sleep for component timers.

/// Sleep for `ms` milliseconds on either the browser or a native runtime.
pub(crate) async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Delay before re-polling the event feed after a failed request, in
/// milliseconds.
pub(crate) const POLL_RETRY_MS: u64 = 3_000;
