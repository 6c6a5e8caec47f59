use crate::utils::error::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

pub const DEFAULT_INTERVAL_MINUTES: u64 = 15;

/// Runs `task` on a fixed interval until `shutdown` resolves.
///
/// Runs are sequential: a run that outlasts the interval delays the next
/// one instead of overlapping it. A failed run is logged and the loop
/// waits for the next tick. Returns the number of runs started.
pub async fn run_every<T, Fut, S>(period: Duration, mut task: T, shutdown: S) -> usize
where
    T: FnMut() -> Fut,
    Fut: Future<Output = Result<()>>,
    S: Future<Output = ()>,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    let mut runs = 0usize;
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested after {} runs", runs);
                return runs;
            }
            _ = ticker.tick() => {
                runs += 1;
                if let Err(e) = task().await {
                    tracing::error!(
                        "Run {} failed: {} (Category: {:?}, Severity: {:?})",
                        runs,
                        e,
                        e.category(),
                        e.severity()
                    );
                    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
                }
            }
        }
    }
}

/// Resolves on Ctrl-C. If the signal handler cannot be installed the loop
/// never stops on its own, which matches a process supervised externally.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NbaAlertError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_keeps_running_after_failures() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let done = Arc::new(Notify::new());

        let runs = {
            let attempts = attempts.clone();
            let done_signal = done.clone();
            run_every(
                Duration::from_millis(5),
                move || {
                    let attempts = attempts.clone();
                    let done = done_signal.clone();
                    async move {
                        let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                        if n == 3 {
                            done.notify_one();
                        }
                        // Every run fails; the loop must not stop on errors.
                        Err(NbaAlertError::UpstreamStatus { status: 502 })
                    }
                },
                async move { done.notified().await },
            )
            .await
        };

        assert!(runs >= 3);
        assert_eq!(attempts.load(Ordering::SeqCst), runs);
    }

    #[tokio::test]
    async fn test_shutdown_before_first_tick_completes() {
        let runs = run_every(Duration::from_secs(3600), || async { Ok(()) }, async {}).await;
        assert!(runs <= 1);
    }
}
