//! # Notification Channel
//!
//! Single-slot, timed, auto-expiring message channel.
//!
//! ## The Bug Class This Module Forbids
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              "Stale Timer Clears Fresh Message"                     │
//! │                                                                     │
//! │  The original screen re-armed a setTimeout on every publish and     │
//! │  never cancelled the previous one:                                  │
//! │                                                                     │
//! │    t=0.0  publish("A")  ── timer A armed (fires t=4.0)              │
//! │    t=3.9  publish("B")  ── timer B armed (fires t=7.9)              │
//! │    t=4.0  timer A fires ── clears "B" after 100 ms on screen  ❌    │
//! │                                                                     │
//! │  Here every publish CANCELS the previous timer, THEN schedules the  │
//! │  new one, and the expiry task double-checks a generation counter    │
//! │  before clearing - so even a timer that was already past its        │
//! │  `.abort()` point cannot clear a fresher message.                   │
//! │                                                                     │
//! │    t=0.0  publish("A")  ── gen=1, timer(gen=1) armed                │
//! │    t=3.9  publish("B")  ── timer(gen=1) aborted, gen=2,             │
//! │                            timer(gen=2) armed (fires t=7.9)         │
//! │    t=7.9  timer fires   ── gen matches, slot cleared          ✅    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Last-write-wins, no stacking: at most one notification is active at any
//! instant, and only the most recent publish's timer may take effect.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::debug;

// =============================================================================
// Notification Snapshot
// =============================================================================

/// What the shell reads each time it renders the notification bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Current message; empty when nothing is active.
    pub message: String,

    /// Whether the bubble should be shown.
    pub visible: bool,
}

impl Notification {
    fn empty() -> Self {
        Notification {
            message: String::new(),
            visible: false,
        }
    }
}

// =============================================================================
// Slot
// =============================================================================

/// The single mutable slot plus the generation counter that lets the
/// expiry task detect it has gone stale.
#[derive(Debug)]
struct Slot {
    message: String,
    visible: bool,
    generation: u64,
}

// =============================================================================
// Notifier
// =============================================================================

/// Single-slot auto-expiring notification channel.
///
/// ## Thread Safety
/// The slot is behind `Arc<Mutex<_>>` so the expiry task and the session
/// actor can both reach it; locks are held only for field updates.
///
/// ## Runtime Requirement
/// [`Notifier::publish`] spawns the expiry task and must be called from
/// within a tokio runtime. The expiry runs even if nothing observes the
/// slot - the bubble disappears on its own, not on the next render.
#[derive(Debug)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    expiry: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl Notifier {
    /// Creates a notifier whose messages expire after `expiry`.
    pub fn new(expiry: Duration) -> Self {
        Notifier {
            slot: Arc::new(Mutex::new(Slot {
                message: String::new(),
                visible: false,
                generation: 0,
            })),
            expiry,
            timer: Mutex::new(None),
        }
    }

    /// Publishes a message, superseding any pending one.
    ///
    /// ## Ordering Discipline
    /// 1. Update the slot and bump the generation
    /// 2. Cancel the previous expiry task
    /// 3. Schedule the new expiry task
    ///
    /// Never "schedule new, let both run": the generation check inside the
    /// task is the backstop, the abort is the discipline.
    pub fn publish(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(message = %message, "publish notification");

        let generation = {
            let mut slot = self.slot.lock().expect("notification slot poisoned");
            slot.generation += 1;
            slot.message = message;
            slot.visible = true;
            slot.generation
        };

        let mut timer = self.timer.lock().expect("notification timer poisoned");
        if let Some(previous) = timer.take() {
            previous.abort();
        }

        let slot = Arc::clone(&self.slot);
        let expiry = self.expiry;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(expiry).await;

            let mut slot = slot.lock().expect("notification slot poisoned");
            // A later publish superseded this timer between sleep and lock
            if slot.generation != generation {
                return;
            }
            debug!(generation, "notification expired");
            slot.message.clear();
            slot.visible = false;
        }));
    }

    /// Snapshot of the slot for rendering.
    pub fn current(&self) -> Notification {
        let slot = self.slot.lock().expect("notification slot poisoned");
        if slot.visible {
            Notification {
                message: slot.message.clone(),
                visible: true,
            }
        } else {
            Notification::empty()
        }
    }

    /// The configured expiry window.
    pub fn expiry(&self) -> Duration {
        self.expiry
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        // Don't leave an expiry task running against a dead session
        if let Ok(mut timer) = self.timer.lock() {
            if let Some(handle) = timer.take() {
                handle.abort();
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, Duration};

    const WINDOW: Duration = Duration::from_secs(4);

    #[tokio::test(start_paused = true)]
    async fn test_publish_then_expire() {
        let notifier = Notifier::new(WINDOW);

        notifier.publish("Scanned Item: ABC123");
        let n = notifier.current();
        assert!(n.visible);
        assert_eq!(n.message, "Scanned Item: ABC123");

        // Just before the window: still visible
        advance(WINDOW - Duration::from_millis(1)).await;
        assert!(notifier.current().visible);

        // Past the window: cleared
        advance(Duration::from_millis(2)).await;
        let n = notifier.current();
        assert!(!n.visible);
        assert!(n.message.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_supersede_restarts_the_window() {
        let notifier = Notifier::new(WINDOW);

        notifier.publish("A");
        advance(WINDOW - Duration::from_millis(100)).await;

        // Supersede just before A's timer would fire
        notifier.publish("B");
        assert_eq!(notifier.current().message, "B");

        // A's original deadline passes: B must survive it
        advance(Duration::from_millis(200)).await;
        let n = notifier.current();
        assert!(n.visible, "stale timer cleared a fresh message");
        assert_eq!(n.message, "B");

        // B's own full window elapses: now it clears
        advance(WINDOW).await;
        assert!(!notifier.current().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_publishes_last_write_wins() {
        let notifier = Notifier::new(WINDOW);

        for i in 0..10 {
            notifier.publish(format!("msg {i}"));
        }
        assert_eq!(notifier.current().message, "msg 9");

        advance(WINDOW - Duration::from_millis(1)).await;
        assert_eq!(notifier.current().message, "msg 9");

        advance(Duration::from_millis(2)).await;
        assert!(!notifier.current().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_slot_snapshot() {
        let notifier = Notifier::new(WINDOW);
        let n = notifier.current();
        assert!(!n.visible);
        assert!(n.message.is_empty());
    }
}
