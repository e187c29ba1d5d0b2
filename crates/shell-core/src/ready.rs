//! One-shot platform readiness signal.
//!
//! The host environment delivers a readiness event exactly once per
//! process lifetime. Instead of an implicit host event dispatcher, the
//! suspension point is an explicit single-fire pair: the host side holds
//! a [`ReadyNotifier`], the bootstrap side awaits the [`PlatformReady`]
//! half. At-most-once delivery is structural, not a convention.

use std::sync::Mutex;

use tokio::sync::oneshot;

/// The notifier half was dropped before the signal fired.
///
/// In a real host environment this cannot happen; in tests it marks a
/// readiness source that went away. The waiter must not treat it as a
/// readiness signal.
#[derive(Debug, thiserror::Error)]
#[error("platform readiness signal lost before firing")]
pub struct SignalLost;

/// Create a connected readiness pair.
pub fn ready_signal() -> (ReadyNotifier, PlatformReady) {
    let (tx, rx) = oneshot::channel();
    (
        ReadyNotifier {
            tx: Mutex::new(Some(tx)),
        },
        PlatformReady { rx },
    )
}

/// Host-side handle that fires the readiness signal at most once.
#[derive(Debug)]
pub struct ReadyNotifier {
    tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl ReadyNotifier {
    /// Fire the signal.
    ///
    /// Returns `true` if this call delivered the signal; `false` if the
    /// signal already fired or the waiter is gone. Callers that fire a
    /// second time get a no-op, never a second delivery.
    pub fn notify(&self) -> bool {
        let tx = self
            .tx
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();
        match tx {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }
}

/// Bootstrap-side handle; awaiting it is the single suspension point
/// between registration and the signal firing.
#[derive(Debug)]
pub struct PlatformReady {
    rx: oneshot::Receiver<()>,
}

impl PlatformReady {
    /// Wait for the signal to fire.
    pub async fn wait(self) -> Result<(), SignalLost> {
        self.rx.await.map_err(|_| SignalLost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notify_wakes_the_waiter() {
        let (notifier, ready) = ready_signal();

        assert!(notifier.notify());
        ready.wait().await.unwrap();
    }

    #[tokio::test]
    async fn second_notify_reports_non_delivery() {
        let (notifier, ready) = ready_signal();

        assert!(notifier.notify());
        assert!(!notifier.notify());
        ready.wait().await.unwrap();
    }

    #[tokio::test]
    async fn dropped_notifier_is_not_a_signal() {
        let (notifier, ready) = ready_signal();

        drop(notifier);
        assert!(ready.wait().await.is_err());
    }

    #[tokio::test]
    async fn notify_after_waiter_dropped_reports_non_delivery() {
        let (notifier, ready) = ready_signal();

        drop(ready);
        assert!(!notifier.notify());
    }
}
