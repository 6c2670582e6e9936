//! Tick scheduler for the spin wheel
//!
//! A background thread emits one unit message per interval over a channel
//! the event loop drains. Cancellation is first-class: after `cancel()` the
//! thread stops emitting within one interval, and the wheel itself ignores
//! any tick that was already queued (a closed wheel is idle).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

/// Handle to a running tick thread
///
/// Dropping the handle cancels the thread, so a ticker can never outlive
/// the spin session that owns it.
#[derive(Debug)]
pub struct Ticker {
    cancelled: Arc<AtomicBool>,
}

impl Ticker {
    /// Spawn a tick thread emitting every `interval`
    ///
    /// Returns the handle and the receiving end the event loop polls.
    pub fn spawn(interval: Duration) -> (Self, Receiver<()>) {
        let (tick_tx, tick_rx) = channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        std::thread::spawn(move || {
            loop {
                std::thread::sleep(interval);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                if tick_tx.send(()).is_err() {
                    // Receiver gone, nobody is listening anymore
                    break;
                }
            }
            log::debug!("ticker thread stopped");
        });

        (Self { cancelled }, tick_rx)
    }

    /// Stop emitting ticks
    ///
    /// Idempotent. The thread observes the flag before its next emission.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
