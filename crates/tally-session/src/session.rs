//! # Session
//!
//! The single-actor façade the mobile shell talks to. One session = one
//! screen instance = one ledger + one scanner gate + one notification slot.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Session Entry Points                          │
//! │                                                                     │
//! │  Camera callback ──► on_scan_payload ──► gate? ingest ─► append     │
//! │                                                        └► publish   │
//! │  Add Item tap ─────► submit_manual_entry ─► validate ──► append     │
//! │                                                        └► publish   │
//! │  Remove tap ───────► remove_item ─────────► remove_at ─► publish    │
//! │  Download tap ─────► export_item ─────────► format ──► sink.write   │
//! │                                                        └► publish   │
//! │  Bell tap ─────────► notify ──────────────────────────► publish     │
//! │                                                                     │
//! │  Rendering reads ledger_view() / notification() snapshots only.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Ledger and gate sit behind `Mutex` so the session can be shared with an
//! app shell's callback plumbing, but the model is still one logical actor:
//! every entry point is a discrete, non-overlapping reaction, no entry
//! point holds two locks at once, and none blocks.

use std::sync::Mutex;

use tracing::{debug, warn};

use tally_core::export::{export_filename, format_item};
use tally_core::validation::validate_entry;
use tally_core::{
    Ledger, LedgerView, LineItem, Money, ScanIngestor, ScannerGate, ScannerState, ValidationError,
};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::notify::{Notification, Notifier};
use crate::sink::ExportSink;

// =============================================================================
// Session
// =============================================================================

/// One point-of-entry session.
///
/// Dropped with the screen; nothing persists (by design - the ledger is
/// transient).
#[derive(Debug)]
pub struct Session {
    ledger: Mutex<Ledger>,
    gate: Mutex<ScannerGate>,
    ingestor: ScanIngestor,
    notifier: Notifier,
}

impl Session {
    /// Creates a session with default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with the given configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Session {
            ledger: Mutex::new(Ledger::new()),
            gate: Mutex::new(ScannerGate::new()),
            ingestor: ScanIngestor::new(config.scan_config()),
            notifier: Notifier::new(config.notification_expiry),
        }
    }

    // =========================================================================
    // Scan Path
    // =========================================================================

    /// Entry point for decoded scan events from the camera hardware.
    ///
    /// ## Behavior
    /// - Gate not Armed (hidden, or a scan is awaiting acknowledgement):
    ///   the event is suppressed, returns `None`
    /// - Gate Armed: captures exactly one payload, appends the ingested
    ///   item, publishes a scan notification, returns the item
    pub fn on_scan_payload(&self, payload: &str) -> Option<LineItem> {
        let captured = self.gate.lock().expect("scanner gate poisoned").try_capture();
        if !captured {
            debug!(payload = %payload, "scan suppressed by gate");
            return None;
        }

        debug!(payload = %payload, "scan captured");
        let item = self.ingestor.ingest(payload);
        self.ledger
            .lock()
            .expect("ledger poisoned")
            .append(item.clone());
        self.notifier.publish(format!("Scanned Item: {payload}"));
        Some(item)
    }

    /// "Show scanner" toggle: arms the gate.
    pub fn show_scanner(&self) {
        self.gate.lock().expect("scanner gate poisoned").show();
    }

    /// "Hide scanner" toggle: idles the gate.
    pub fn hide_scanner(&self) {
        self.gate.lock().expect("scanner gate poisoned").hide();
    }

    /// "Scan again" action: re-arms after a capture.
    pub fn resume_scanning(&self) {
        self.gate.lock().expect("scanner gate poisoned").resume();
    }

    /// Current scanner state, for the shell to render.
    pub fn scanner_state(&self) -> ScannerState {
        self.gate.lock().expect("scanner gate poisoned").state()
    }

    // =========================================================================
    // Manual Entry Path
    // =========================================================================

    /// Entry point for the manual entry form.
    ///
    /// ## Behavior
    /// - Any invalid field: returns the error, nothing mutates; the shell
    ///   leaves the form intact
    /// - Valid: appends, publishes an "item added" notification, returns
    ///   the item - `Ok` is the shell's signal to clear all three fields
    pub fn submit_manual_entry(
        &self,
        raw_name: &str,
        raw_quantity: &str,
        raw_price: &str,
    ) -> Result<LineItem, ValidationError> {
        let item = match validate_entry(raw_name, raw_quantity, raw_price) {
            Ok(item) => item,
            Err(err) => {
                debug!(error = %err, "manual entry rejected");
                return Err(err);
            }
        };

        debug!(name = %item.name, quantity = item.quantity, "manual entry accepted");
        self.ledger
            .lock()
            .expect("ledger poisoned")
            .append(item.clone());
        self.notifier.publish(format!("Product Name: {}", describe(&item)));
        Ok(item)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes the entry at `index`.
    ///
    /// Checked: an out-of-range index (e.g. one captured before another
    /// removal shifted the sequence) leaves the ledger unchanged and is
    /// reported, never spliced blindly.
    pub fn remove_item(&self, index: usize) -> Result<LineItem, SessionError> {
        let removed = self
            .ledger
            .lock()
            .expect("ledger poisoned")
            .remove_at(index)
            .map_err(|err| {
                warn!(index, "removal rejected: {err}");
                SessionError::from(err)
            })?;

        debug!(index, name = %removed.name, "item removed");
        self.notifier.publish(format!("Removed {}", describe(&removed)));
        Ok(removed)
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Renders the entry at `index` and hands it to the storage
    /// collaborator. One attempt; success or failure is reported once as a
    /// notification and the failure is also returned to the caller.
    pub fn export_item(&self, index: usize, sink: &dyn ExportSink) -> Result<(), SessionError> {
        let item = {
            let ledger = self.ledger.lock().expect("ledger poisoned");
            ledger
                .items()
                .get(index)
                .cloned()
                .ok_or_else(|| SessionError::from(tally_core::CoreError::IndexOutOfRange {
                    index,
                    len: ledger.len(),
                }))?
        };

        let filename = export_filename(&item);
        let content = format_item(&item);
        debug!(index, filename = %filename, "exporting item");

        match sink.write(&filename, &content) {
            Ok(()) => {
                self.notifier.publish(format!("Downloaded {}", describe(&item)));
                Ok(())
            }
            Err(err) => {
                warn!(filename = %filename, "export failed: {err}");
                self.notifier.publish(format!("Error exporting {}", item.name));
                Err(err.into())
            }
        }
    }

    // =========================================================================
    // Notifications & Reads
    // =========================================================================

    /// Explicit user notification request (the bell).
    pub fn notify(&self, message: impl Into<String>) {
        self.notifier.publish(message);
    }

    /// Notification slot snapshot.
    pub fn notification(&self) -> Notification {
        self.notifier.current()
    }

    /// Ledger snapshot (items + totals) for rendering.
    pub fn ledger_view(&self) -> LedgerView {
        LedgerView::from(&*self.ledger.lock().expect("ledger poisoned"))
    }

    /// The running total.
    pub fn total(&self) -> Money {
        self.ledger.lock().expect("ledger poisoned").total()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// `Pen (Quantity: 3, Price: $5.00)` - the description shape shared by the
/// added/removed/downloaded notifications.
fn describe(item: &LineItem) -> String {
    match item.price {
        Some(price) => format!(
            "{} (Quantity: {}, Price: {})",
            item.name, item.quantity, price
        ),
        None => format!("{} (Quantity: {})", item.name, item.quantity),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::time::Duration;
    use tokio::time::advance;

    fn session() -> Session {
        Session::new()
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_path_appends_and_notifies() {
        let s = session();
        s.show_scanner();

        let item = s.on_scan_payload("ABC123").unwrap();
        assert_eq!(item.name, "Scanned Item - ABC123");
        assert_eq!(item.quantity, 1);

        let view = s.ledger_view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.totals.total_cents, 500);

        let n = s.notification();
        assert!(n.visible);
        assert_eq!(n.message, "Scanned Item: ABC123");
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_suppressed_until_resume() {
        let s = session();

        // Scanner hidden: nothing happens
        assert!(s.on_scan_payload("X").is_none());
        assert_eq!(s.ledger_view().items.len(), 0);

        s.show_scanner();
        assert!(s.on_scan_payload("X").is_some());

        // Camera keeps firing for the same barcode; all suppressed
        assert!(s.on_scan_payload("X").is_none());
        assert!(s.on_scan_payload("X").is_none());
        assert_eq!(s.ledger_view().items.len(), 1);

        // Explicit acknowledgement re-arms
        s.resume_scanning();
        assert!(s.on_scan_payload("X").is_some());
        assert_eq!(s.ledger_view().items.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_scan_totals() {
        let s = session();
        s.show_scanner();

        s.on_scan_payload("ABC123").unwrap();
        s.resume_scanning();
        s.on_scan_payload("ABC123").unwrap();

        let view = s.ledger_view();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0], view.items[1]);
        assert_eq!(view.totals.total_cents, 1000); // 2 × default $5.00
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_entry_accept_and_reject() {
        let s = session();

        assert!(s.submit_manual_entry("", "3", "5.00").is_err());
        assert!(s.submit_manual_entry("Pen", "-1", "5.00").is_err());
        assert!(s.submit_manual_entry("Pen", "abc", "5.00").is_err());
        // Rejections never mutate or notify
        assert_eq!(s.ledger_view().items.len(), 0);
        assert!(!s.notification().visible);

        let item = s.submit_manual_entry("Pen", "3", "5.00").unwrap();
        assert_eq!(item.name, "Pen");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price.unwrap().cents(), 500);

        assert_eq!(s.total().cents(), 1500);
        assert_eq!(
            s.notification().message,
            "Product Name: Pen (Quantity: 3, Price: $5.00)"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_item_checked() {
        let s = session();
        s.submit_manual_entry("Pen", "1", "1.00").unwrap();

        let err = s.remove_item(5).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::IndexOutOfRange);
        assert_eq!(s.ledger_view().items.len(), 1);

        let removed = s.remove_item(0).unwrap();
        assert_eq!(removed.name, "Pen");
        assert_eq!(s.total().cents(), 0);
        assert!(s
            .notification()
            .message
            .starts_with("Removed Pen"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_success_and_failure() {
        let s = session();
        s.submit_manual_entry("Pen", "3", "5.00").unwrap();

        let sink = MemorySink::new();
        s.export_item(0, &sink).unwrap();

        let writes = sink.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, "pen.txt");
        assert_eq!(writes[0].1, "Product Name: Pen\nQuantity: 3\nPrice: $5.00\n");
        assert_eq!(
            s.notification().message,
            "Downloaded Pen (Quantity: 3, Price: $5.00)"
        );

        let failing = MemorySink::failing("disk full");
        let err = s.export_item(0, &failing).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ExportError);
        assert_eq!(s.notification().message, "Error exporting Pen");
        // Ledger untouched either way
        assert_eq!(s.ledger_view().items.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_out_of_range() {
        let s = session();
        let err = s.export_item(0, &MemorySink::new()).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::IndexOutOfRange);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_expiry_through_session() {
        let s = session();
        s.notify("New Notification");
        assert!(s.notification().visible);

        advance(Duration::from_secs(4) + Duration::from_millis(1)).await;
        assert!(!s.notification().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_mutation_publishes() {
        let s = session();
        s.show_scanner();

        s.on_scan_payload("A").unwrap();
        assert!(s.notification().visible);

        s.submit_manual_entry("Pen", "1", "1.00").unwrap();
        assert!(s.notification().message.starts_with("Product Name"));

        s.remove_item(0).unwrap();
        assert!(s.notification().message.starts_with("Removed"));
    }
}
