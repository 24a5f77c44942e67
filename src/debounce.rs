//! Trailing-edge debouncer for rapid event streams
//!
//! Coalesces bursts of triggers (keystrokes, selection changes) into a single
//! invocation of an async action once the stream has been quiet for the
//! configured delay. The action runs with the arguments of the most recent
//! trigger; earlier arguments in the burst are discarded.
//!
//! Only the *scheduling* of the next invocation is ever cancelled. Work
//! already started by a previous invocation (such as an in-flight network
//! request) is never interrupted.
//!
//! # Example
//!
//! ```ignore
//! let debounced = debounce(
//!     |text: String| async move { println!("translate: {}", text) },
//!     Duration::from_millis(300),
//! );
//! debounced.trigger("H".to_string());
//! debounced.trigger("He".to_string());
//! debounced.trigger("Hello".to_string()); // only this one fires
//! ```

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Handle returned by [`debounce`]
///
/// Dropping the handle cancels any pending (not yet fired) invocation.
pub struct Debounced<T> {
    tx: mpsc::UnboundedSender<T>,
    worker: JoinHandle<()>,
}

impl<T> Debounced<T> {
    /// Reset the quiet period and replace the pending arguments
    ///
    /// Fire-and-forget: nothing is returned and the action's completion is
    /// not observable through the handle.
    pub fn trigger(&self, args: T) {
        // send only fails when the worker is gone, in which case the
        // trigger is dropped just like a cancelled timeout
        let _ = self.tx.send(args);
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

/// Wrap `action` so repeated triggers within `delay` collapse into one call
///
/// Guarantees:
/// - at most one pending invocation exists at any time;
/// - a burst of N triggers inside the quiet period runs the action exactly
///   once, with the N-th trigger's arguments;
/// - after the action fires, the next trigger starts an independent cycle;
/// - `delay` of zero still defers execution to the scheduler rather than
///   running synchronously inside `trigger`.
pub fn debounce<T, F, Fut>(mut action: F, delay: Duration) -> Debounced<T>
where
    T: Send + 'static,
    F: FnMut(T) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<T>();

    let worker = tokio::spawn(async move {
        while let Some(first) = rx.recv().await {
            let mut latest = first;
            loop {
                tokio::select! {
                    next = rx.recv() => match next {
                        // a fresh trigger restarts the quiet period
                        Some(args) => latest = args,
                        None => return,
                    },
                    _ = sleep(delay) => {
                        action(latest).await;
                        break;
                    }
                }
            }
        }
    });

    Debounced { tx, worker }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    type Recorded = std::pin::Pin<Box<dyn Future<Output = ()> + Send>>;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl FnMut(u32) -> Recorded) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let action = move |v: u32| -> Recorded {
            let sink = sink.clone();
            Box::pin(async move {
                sink.lock().unwrap().push(v);
            })
        };
        (calls, action)
    }

    #[tokio::test]
    async fn test_burst_collapses_to_last_arguments() {
        let (calls, action) = recorder();
        let debounced = debounce(action, Duration::from_millis(50));

        for v in 1..=5 {
            debounced.trigger(v);
            sleep(Duration::from_millis(5)).await;
        }
        sleep(Duration::from_millis(150)).await;

        assert_eq!(*calls.lock().unwrap(), vec![5]);
    }

    #[tokio::test]
    async fn test_triggers_in_same_tick_collapse() {
        let (calls, action) = recorder();
        let debounced = debounce(action, Duration::from_millis(20));

        for v in 1..=10 {
            debounced.trigger(v);
        }
        sleep(Duration::from_millis(100)).await;

        assert_eq!(*calls.lock().unwrap(), vec![10]);
    }

    #[tokio::test]
    async fn test_separate_bursts_fire_independently() {
        let (calls, action) = recorder();
        let debounced = debounce(action, Duration::from_millis(20));

        debounced.trigger(1);
        sleep(Duration::from_millis(80)).await;
        debounced.trigger(2);
        sleep(Duration::from_millis(80)).await;

        assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_zero_delay_still_defers() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let debounced = debounce(
            move |_: ()| {
                let seen = seen.clone();
                async move {
                    seen.fetch_add(1, Ordering::SeqCst);
                }
            },
            Duration::ZERO,
        );

        debounced.trigger(());
        // current-thread runtime: the worker cannot have run yet
        assert_eq!(count.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(20)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_invocation() {
        let (calls, action) = recorder();
        let debounced = debounce(action, Duration::from_millis(30));

        debounced.trigger(1);
        drop(debounced);
        sleep(Duration::from_millis(100)).await;

        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_trigger_during_quiet_period_restarts_it() {
        let (calls, action) = recorder();
        let debounced = debounce(action, Duration::from_millis(60));

        debounced.trigger(1);
        sleep(Duration::from_millis(40)).await;
        // still inside the quiet period, so nothing fired yet
        assert!(calls.lock().unwrap().is_empty());

        debounced.trigger(2);
        sleep(Duration::from_millis(40)).await;
        // the restart pushed the deadline past this point too
        assert!(calls.lock().unwrap().is_empty());

        sleep(Duration::from_millis(60)).await;
        assert_eq!(*calls.lock().unwrap(), vec![2]);
    }
}
