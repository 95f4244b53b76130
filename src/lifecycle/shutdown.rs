//! Shutdown coordination for the server.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::lifecycle::signals::wait_for_signal;

/// Coordinator for graceful shutdown.
///
/// Long-running tasks subscribe to a broadcast channel; triggering it once
/// notifies every subscriber. Further triggers are ignored.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    triggered: AtomicBool,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            triggered: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Notify all subscribers. Returns false if shutdown was already triggered.
    pub fn trigger(&self) -> bool {
        if self.triggered.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::info!(subscribers = self.tx.receiver_count(), "Shutdown triggered");
        let _ = self.tx.send(());
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Trigger shutdown when the process receives SIGINT or SIGTERM.
    pub fn listen_for_signals(self: &Arc<Self>) {
        let shutdown = Arc::clone(self);
        tokio::spawn(async move {
            let signal = wait_for_signal().await;
            tracing::info!(signal, "Signal received");
            shutdown.trigger();
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
