//! Shutdown coordination for the relay.

use std::future::Future;

use tokio::sync::broadcast;

use crate::lifecycle::signals;

/// Fan-out of a single "stop serving" event.
///
/// `HttpServer::run` holds one receiver and drains in-flight fetches once it
/// fires. Clones share the same channel.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Trigger once Ctrl+C or SIGTERM arrives.
    pub fn on_signal() -> Self {
        Self::when(signals::wait_for_signal())
    }

    /// Trigger once `event` completes. Must be called inside a tokio runtime.
    pub fn when<F>(event: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let shutdown = Self::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            event.await;
            trigger.trigger();
        });
        shutdown
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Send the stop event. Receivers subscribed later do not see it.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
