//! Cancellation signal for in-flight fetches
//!
//! A `CancelSource`/`CancelToken` pair over a tokio watch channel. The view
//! holds the source and fires it on teardown; the feed manager selects the
//! token against the provider fetch and discards the request without
//! persisting anything when cancellation wins.

use tokio::sync::watch;

/// Sending half: fires the cancellation signal
pub struct CancelSource {
    tx: watch::Sender<bool>,
}

/// Receiving half: observed by the feed manager during a fetch
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: Option<watch::Receiver<bool>>,
}

/// Creates a connected source/token pair.
pub fn cancel_pair() -> (CancelSource, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelSource { tx }, CancelToken { rx: Some(rx) })
}

impl CancelSource {
    /// Signals cancellation to every token cloned from this pair.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    /// Creates another token observing this source.
    #[allow(dead_code)]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: Some(self.tx.subscribe()),
        }
    }
}

impl CancelToken {
    /// A token that never fires, for callers without a teardown path.
    #[allow(dead_code)]
    pub fn never() -> Self {
        Self { rx: None }
    }

    /// Whether cancellation has already been signalled.
    #[allow(dead_code)]
    pub fn is_cancelled(&self) -> bool {
        self.rx.as_ref().map(|rx| *rx.borrow()).unwrap_or(false)
    }

    /// Resolves once cancellation is signalled; pends forever on a `never`
    /// token or when the source is dropped without firing.
    pub async fn cancelled(&mut self) {
        match &mut self.rx {
            Some(rx) => {
                if rx.wait_for(|cancelled| *cancelled).await.is_err() {
                    futures::future::pending::<()>().await;
                }
            }
            None => futures::future::pending::<()>().await,
        }
    }
}
