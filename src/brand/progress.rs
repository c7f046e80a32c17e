//! Rotating status phrases for an in-flight generation
//!
//! Purely cosmetic UI feedback. The ticker is a background task scoped to
//! one operation; dropping the guard aborts it, so no timer can outlive the
//! operation on any exit path.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Phrases cycled while a brand bible is being generated.
pub const STATUS_PHRASES: &[&str] = &[
    "Analyzing your mission...",
    "Crafting brand strategy...",
    "Designing logo concepts...",
    "Mixing the perfect color palette...",
    "Pairing elegant fonts...",
    "Finalizing your brand bible...",
];

/// Aborts the ticker task when dropped.
pub struct TickerGuard {
    handle: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("progress ticker stopped");
    }
}

/// Spawn the rotating status ticker.
///
/// The first phrase is sent immediately, then one every `interval`, cycling
/// through [`STATUS_PHRASES`]. Sending stops when the receiver side hangs up
/// or the guard aborts the task.
pub fn spawn_ticker(interval: Duration, tx: UnboundedSender<&'static str>) -> TickerGuard {
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        for phrase in STATUS_PHRASES.iter().cycle().copied() {
            ticker.tick().await;
            if tx.send(phrase).is_err() {
                break;
            }
        }
    });

    TickerGuard { handle }
}
