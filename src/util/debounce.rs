use std::time::Duration;

use tokio::select;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

/// Trailing-edge debouncer running on the tokio runtime.
///
/// Every [`call`](Self::call) restarts the quiet period. Once `wait` passes
/// without a new call, the action runs once with the last value. Dropping the
/// debouncer does not cancel a pending value; it is still delivered when its
/// quiet period ends.
#[derive(Debug)]
pub struct Debouncer<T> {
    /// Feeds the background task.
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// What: Spawn the debounce task.
    ///
    /// Inputs:
    /// - `wait`: Quiet period
    /// - `action`: Invoked with the last value after each quiet period
    ///
    /// Output:
    /// - Handle used to feed values.
    ///
    /// # Panics
    /// - When called outside a tokio runtime.
    pub fn new<F>(wait: Duration, mut action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        tokio::spawn(async move {
            while let Some(first) = rx.recv().await {
                let mut latest = first;
                let mut deadline = Instant::now() + wait;
                loop {
                    select! {
                        next = rx.recv() => match next {
                            Some(v) => {
                                latest = v;
                                deadline = Instant::now() + wait;
                            }
                            None => {
                                sleep_until(deadline).await;
                                break;
                            }
                        },
                        () = sleep_until(deadline) => break,
                    }
                }
                action(latest);
            }
        });
        Self { tx }
    }

    /// Feed a value, restarting the quiet period.
    pub fn call(&self, value: T) {
        if self.tx.send(value).is_err() {
            tracing::debug!("debounce task gone; value dropped");
        }
    }
}
