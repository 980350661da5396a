//! Async timing helpers that work on both wasm and native targets.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};

/// Sleep without blocking the UI thread.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = duration.as_millis().min(u32::MAX as u128) as u32;
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}

/// Race `fut` against a timer. `None` means the timer won.
pub async fn with_timeout<F>(duration: Duration, fut: F) -> Option<F::Output>
where
    F: Future,
{
    let fut = pin!(fut);
    let timer = pin!(sleep(duration));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fast_future_wins() {
        let out = with_timeout(Duration::from_millis(500), async { 7 }).await;
        assert_eq!(out, Some(7));
    }

    #[tokio::test]
    async fn slow_future_times_out() {
        let out = with_timeout(
            Duration::from_millis(10),
            sleep(Duration::from_millis(500)),
        )
        .await;
        assert_eq!(out, None);
    }
}
