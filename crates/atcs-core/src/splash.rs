//! Splash screen timer
//!
//! The splash screen owns a single cancellable timer: pending until it
//! either fires the screen transition or is cancelled by teardown. The
//! handle aborts its task on `cancel()` and on drop, so an unmounted
//! splash can never fire.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Scoped, cancellable one-shot timer handle
///
/// Must be started from within a tokio runtime (Tauri's async runtime in
/// the application).
pub struct SplashTimer {
    handle: JoinHandle<()>,
}

impl SplashTimer {
    /// Start the countdown; `on_expiry` runs once, unless cancelled first
    pub fn start<F>(duration: Duration, on_expiry: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            tracing::debug!("Splash timer expired");
            on_expiry();
        });

        Self { handle }
    }

    /// Cancel the pending transition; no-op if already fired
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_duration() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let timer = SplashTimer::start(Duration::from_millis(3000), move || {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(!timer.is_finished());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(fired.load(Ordering::SeqCst));
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_expiry_never_fires() {
        // Scenario D: teardown at 1000 ms of a 3000 ms countdown
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let timer = SplashTimer::start(Duration::from_millis(3000), move || {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timer() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let timer = SplashTimer::start(Duration::from_millis(3000), move || {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        drop(timer);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_fire_is_noop() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let timer = SplashTimer::start(Duration::from_millis(100), move || {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(fired.load(Ordering::SeqCst));

        timer.cancel();
        assert!(fired.load(Ordering::SeqCst));
    }
}
