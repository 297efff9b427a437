//! Trailing-edge debouncing for live previews.
//!
//! Edits arrive in bursts; re-rendering on every keystroke or file event
//! would waste work. A [`Debouncer`] collapses a burst of triggers into a
//! single invocation once no new trigger has arrived for the configured
//! interval.

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Debouncer {
    tx: mpsc::UnboundedSender<()>,
    handle: JoinHandle<()>,
}

impl Debouncer {
    /// Spawns the debouncing task on the current tokio runtime.
    pub fn spawn<F, Fut>(quiet: Duration, mut action: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let handle = tokio::spawn(async move {
            while rx.recv().await.is_some() {
                loop {
                    match tokio::time::timeout(quiet, rx.recv()).await {
                        Ok(Some(())) => continue,
                        // Senders gone mid-burst: flush and stop.
                        Ok(None) => {
                            action().await;
                            return;
                        }
                        Err(_) => break,
                    }
                }
                action().await;
            }
        });
        Self { tx, handle }
    }

    /// Records a trigger. Returns `false` once the task has stopped.
    pub fn trigger(&self) -> bool {
        self.tx.send(()).is_ok()
    }

    /// Stops accepting triggers, runs a pending invocation and waits for it.
    pub async fn close(self) {
        drop(self.tx);
        if let Err(e) = self.handle.await {
            log::warn!("Debounced task ended abnormally: {}", e);
        }
    }
}
